use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::finish_op;
use crate::tensor::{full, Tensor};
use std::sync::Arc;

/// Backward operation context for `sum_op`.
#[derive(Debug)]
struct SumBackward {
    input: Tensor,
    input_shape: Vec<usize>,
}

impl BackwardOp for SumBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        // Every element contributes with weight 1.
        let g = grad_output.item()?;
        Ok(vec![full(&self.input_shape, g)?])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

/// Sums all elements into a rank-0 tensor. The sum of an empty tensor is 0.
pub fn sum_op(t: &Tensor) -> Result<Tensor, LinCalError> {
    let total: f64 = t.read_data().data.iter().sum();
    finish_op(vec![total], Vec::new(), t.requires_grad(), || {
        Arc::new(SumBackward {
            input: t.clone(),
            input_shape: t.shape(),
        })
    })
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
