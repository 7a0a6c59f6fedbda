use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::{broadcast_binary, finish_op};
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Tensor,
    b: Tensor,
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        // d(a+b)/da = d(a+b)/db = 1, only the broadcast needs undoing.
        let grad_a = grad_output.reduce_to_shape(&self.a_shape)?;
        let grad_b = grad_output.reduce_to_shape(&self.b_shape)?;
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }
}

/// Element-wise `a + b` with broadcasting.
///
/// # Errors
/// `BroadcastError` if the shapes are not broadcast-compatible.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, LinCalError> {
    let (values, shape) = broadcast_binary(a, b, |x, y| x + y)?;
    finish_op(values, shape, a.requires_grad() || b.requires_grad(), || {
        Arc::new(AddBackward {
            a: a.clone(),
            b: b.clone(),
            a_shape: a.shape(),
            b_shape: b.shape(),
        })
    })
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
