pub(crate) mod shuffle;
pub(crate) mod precomputed;
