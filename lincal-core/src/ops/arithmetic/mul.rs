use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::{broadcast_binary, finish_op};
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Tensor,
    b: Tensor,
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        let grad_a = mul_op(grad_output, &self.b.detach())?.reduce_to_shape(&self.a_shape)?;
        let grad_b = mul_op(grad_output, &self.a.detach())?.reduce_to_shape(&self.b_shape)?;
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }
}

/// Element-wise `a * b` with broadcasting.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, LinCalError> {
    let (values, shape) = broadcast_binary(a, b, |x, y| x * y)?;
    finish_op(values, shape, a.requires_grad() || b.requires_grad(), || {
        Arc::new(MulBackward {
            a: a.clone(),
            b: b.clone(),
            a_shape: a.shape(),
            b_shape: b.shape(),
        })
    })
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
