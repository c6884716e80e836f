use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the clustering engine and its file collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter (e.g. `k`, or the iteration limit) is out of range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// Fewer points were supplied than clusters were requested.
    #[error("the number of points ({sample_cnt}) is less than k ({k})")]
    InsufficientData { k: usize, sample_cnt: usize },

    /// A sample contains a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteSample { index: usize },

    /// The input file could not be opened or read.
    #[error("unable to open input file {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("unable to write output file {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter { name, message: message.into() }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
