use crate::{KMeans, KMeansConfig, KMeansState, Result, memory::*};
use rand::seq::SliceRandom;
use std::ops::DerefMut;

pub fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<()> {
    state.order.shuffle(config.rnd.borrow_mut().deref_mut());
    // First k permuted samples become the initial centroids
    state.order.iter().cloned().take(state.k)
        .zip(state.centroids.iter_mut())
        .for_each(|(sample_idx, c)| *c = kmean.samples[sample_idx]);
    Ok(())
}
