use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::finish_op;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward operation context for `reshape_op`.
#[derive(Debug)]
struct ReshapeBackward {
    input: Tensor,
    original_shape: Vec<usize>,
}

impl BackwardOp for ReshapeBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        Ok(vec![reshape_op(grad_output, self.original_shape.clone())?])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

/// Returns a tensor with the same row-major values and a new shape.
///
/// # Errors
/// `ShapeMismatch` if the element counts differ.
pub fn reshape_op(t: &Tensor, new_shape: Vec<usize>) -> Result<Tensor, LinCalError> {
    let original_shape = t.shape();
    let new_numel: usize = new_shape.iter().product();
    if new_numel != t.numel() {
        return Err(LinCalError::ShapeMismatch {
            expected: new_shape,
            actual: original_shape,
            operation: "reshape".to_string(),
        });
    }
    finish_op(t.to_vec(), new_shape, t.requires_grad(), || {
        Arc::new(ReshapeBackward {
            input: t.clone(),
            original_shape,
        })
    })
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
