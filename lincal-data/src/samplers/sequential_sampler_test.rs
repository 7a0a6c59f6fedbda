// lincal-data/src/samplers/sequential_sampler_test.rs

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_sequential_sampler_len() {
    let sampler = SequentialSampler::new();
    assert_eq!(sampler.len(0), 0);
    assert_eq!(sampler.len(5), 5);
    assert_eq!(sampler.len(100), 100);
}

#[test]
fn test_sequential_sampler_empty() {
    let mut rng = StdRng::seed_from_u64(0);
    let indices = SequentialSampler::new().sample_indices(0, &mut rng).unwrap();
    assert!(indices.is_empty());
}

#[test]
fn test_sequential_sampler_in_order() {
    let mut rng = StdRng::seed_from_u64(0);
    let indices = SequentialSampler::new().sample_indices(5, &mut rng).unwrap();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}
