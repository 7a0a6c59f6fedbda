// src/tensor/create.rs

use crate::error::LinCalError;
use crate::tensor::Tensor;

/// Creates a tensor of the given shape filled with `value`.
pub fn full(shape: &[usize], value: f64) -> Result<Tensor, LinCalError> {
    let numel: usize = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a tensor of the given shape filled with zeros.
pub fn zeros(shape: &[usize]) -> Result<Tensor, LinCalError> {
    full(shape, 0.0)
}

/// Creates a tensor of the given shape filled with ones.
pub fn ones(shape: &[usize]) -> Result<Tensor, LinCalError> {
    full(shape, 1.0)
}

/// Zeros with the shape of `other`.
pub fn zeros_like(other: &Tensor) -> Result<Tensor, LinCalError> {
    zeros(&other.shape())
}

/// Ones with the shape of `other`.
pub fn ones_like(other: &Tensor) -> Result<Tensor, LinCalError> {
    ones(&other.shape())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
