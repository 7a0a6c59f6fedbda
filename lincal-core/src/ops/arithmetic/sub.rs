use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::arithmetic::neg_op;
use crate::ops::{broadcast_binary, finish_op};
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward operation context for subtraction.
#[derive(Debug)]
struct SubBackward {
    a: Tensor,
    b: Tensor,
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        let grad_a = grad_output.reduce_to_shape(&self.a_shape)?;
        let grad_b = neg_op(&grad_output.reduce_to_shape(&self.b_shape)?)?;
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }
}

/// Element-wise `a - b` with broadcasting.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, LinCalError> {
    let (values, shape) = broadcast_binary(a, b, |x, y| x - y)?;
    finish_op(values, shape, a.requires_grad() || b.requires_grad(), || {
        Arc::new(SubBackward {
            a: a.clone(),
            b: b.clone(),
            a_shape: a.shape(),
            b_shape: b.shape(),
        })
    })
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
