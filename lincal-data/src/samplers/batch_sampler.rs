// lincal-data/src/samplers/batch_sampler.rs

use super::random_sampler::RandomSampler;
use super::sequential_sampler::SequentialSampler;
use super::traits::Sampler;
use crate::datasets::{Batch, CalibrationDataset, Dataset};
use lincal_core::LinCalError;
use rand::RngCore;

/// Draws fixed-size batches of distinct rows from a calibration dataset.
///
/// Each draw is independent of the previous ones, so repeated draws may
/// revisit rows and an epoch does not necessarily cover the whole dataset.
#[derive(Debug, Clone)]
pub struct BatchSampler {
    batch_size: usize,
    sampler: RandomSampler,
}

impl BatchSampler {
    /// # Errors
    /// `ConfigurationError` if `batch_size` is zero.
    pub fn new(batch_size: usize) -> Result<Self, LinCalError> {
        if batch_size == 0 {
            return Err(LinCalError::ConfigurationError(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        Ok(BatchSampler {
            batch_size,
            sampler: RandomSampler::new(false, Some(batch_size)),
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Picks `batch_size` distinct rows uniformly at random.
    ///
    /// # Errors
    /// `SampleSizeTooLarge` if the dataset has fewer rows than `batch_size`.
    pub fn draw(
        &self,
        dataset: &CalibrationDataset,
        rng: &mut dyn RngCore,
    ) -> Result<Batch, LinCalError> {
        let indices = self.sampler.sample_indices(dataset.len(), rng)?;
        log::trace!("Drew batch indices {:?}", indices);
        dataset.select(&indices)
    }

    /// Every row of the dataset, in file order.
    pub fn full(dataset: &CalibrationDataset) -> Result<Batch, LinCalError> {
        dataset.select(&SequentialSampler::new().indices(dataset.len()))
    }
}

#[cfg(test)]
#[path = "batch_sampler_test.rs"]
mod tests;
