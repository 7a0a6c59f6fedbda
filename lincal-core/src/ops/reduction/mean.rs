use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::finish_op;
use crate::tensor::{full, Tensor};
use std::sync::Arc;

/// Backward operation context for `mean_op`.
#[derive(Debug)]
struct MeanBackward {
    input: Tensor,
    input_shape: Vec<usize>,
    n: usize,
}

impl BackwardOp for MeanBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        // Calculate gradient scaled by 1/N
        let g = grad_output.item()? / self.n as f64;
        Ok(vec![full(&self.input_shape, g)?])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

/// Arithmetic mean of all elements, as a rank-0 tensor.
///
/// # Errors
/// `ArithmeticError` for an empty tensor.
pub fn mean_op(t: &Tensor) -> Result<Tensor, LinCalError> {
    let n = t.numel();
    if n == 0 {
        return Err(LinCalError::ArithmeticError(
            "mean of an empty tensor".to_string(),
        ));
    }
    let mean = t.read_data().data.iter().sum::<f64>() / n as f64;
    finish_op(vec![mean], Vec::new(), t.requires_grad(), || {
        Arc::new(MeanBackward {
            input: t.clone(),
            input_shape: t.shape(),
            n,
        })
    })
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
