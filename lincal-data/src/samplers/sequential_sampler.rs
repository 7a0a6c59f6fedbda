// lincal-data/src/samplers/sequential_sampler.rs

use super::traits::Sampler;
use lincal_core::LinCalError;
use rand::RngCore;

/// Visits every index in order: `0, 1, ..., dataset_len - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }

    pub fn indices(&self, dataset_len: usize) -> Vec<usize> {
        (0..dataset_len).collect()
    }
}

impl Sampler for SequentialSampler {
    fn sample_indices(
        &self,
        dataset_len: usize,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<usize>, LinCalError> {
        Ok(self.indices(dataset_len))
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
