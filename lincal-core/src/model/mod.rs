//! Straight-line models `y = k*x + b`.
//!
//! Both implementations take a rank-1 batch of inputs `[n]`, return `[n]`, and
//! expose their parameters in `[k, b]` order so the training loop and the
//! optimizers can treat them interchangeably.

pub mod dense_line;
pub mod line;
pub mod scalar_line;

pub use dense_line::DenseLine;
pub use line::LineModel;
pub use scalar_line::ScalarLine;

use crate::error::LinCalError;
use crate::tensor::Tensor;

// Both models accept only a batch vector.
pub(crate) fn check_batch_input(input: &Tensor, operation: &str) -> Result<usize, LinCalError> {
    let shape = input.shape();
    if shape.len() != 1 {
        return Err(LinCalError::ShapeMismatch {
            expected: vec![input.numel()],
            actual: shape,
            operation: operation.to_string(),
        });
    }
    Ok(shape[0])
}
