// lincal-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use lincal_core::LinCalError;
use rand::seq::index;
use rand::{Rng, RngCore};

/// A sampler that randomly samples indices from a dataset.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
        }
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }

    pub fn num_samples(&self) -> Option<usize> {
        self.num_samples
    }
}

impl Sampler for RandomSampler {
    /// Draws `num_samples` indices in `[0, dataset_len)`.
    ///
    /// Without replacement the indices are distinct and in no particular order.
    ///
    /// # Errors
    /// `SampleSizeTooLarge` when more distinct indices are requested than exist.
    fn sample_indices(
        &self,
        dataset_len: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<usize>, LinCalError> {
        let requested = self.len(dataset_len);
        if self.replacement {
            if requested > 0 && dataset_len == 0 {
                return Err(LinCalError::SampleSizeTooLarge {
                    requested,
                    available: 0,
                });
            }
            return Ok((0..requested)
                .map(|_| rng.gen_range(0..dataset_len))
                .collect());
        }
        if requested > dataset_len {
            return Err(LinCalError::SampleSizeTooLarge {
                requested,
                available: dataset_len,
            });
        }
        Ok(index::sample(rng, dataset_len, requested).into_vec())
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
