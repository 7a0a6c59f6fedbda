// lincal-data/src/samplers/traits.rs

use lincal_core::LinCalError;
use rand::RngCore;
use std::fmt::Debug;

/// Defines which indices of a dataset are visited, and in which order.
///
/// The random source is passed in by the caller, so a seeded generator makes
/// every draw reproducible.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the indices to visit for a dataset of `dataset_len` items.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    /// * `rng` - Random source; deterministic samplers ignore it.
    fn sample_indices(
        &self,
        dataset_len: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<usize>, LinCalError>;

    /// Returns the number of indices `sample_indices` yields for `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
