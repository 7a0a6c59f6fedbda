use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::finish_op;
use crate::tensor::Tensor;
use std::sync::Arc;

#[derive(Debug)]
struct TransposeBackward {
    input: Tensor,
}

impl BackwardOp for TransposeBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        Ok(vec![transpose_op(grad_output)?])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

/// Swaps the two axes of a rank-2 tensor, copying into a contiguous result.
///
/// # Errors
/// `ShapeMismatch` if the tensor is not rank 2.
pub fn transpose_op(t: &Tensor) -> Result<Tensor, LinCalError> {
    if t.rank() != 2 {
        return Err(LinCalError::ShapeMismatch {
            expected: vec![0, 0],
            actual: t.shape(),
            operation: "transpose (rank 2 required)".to_string(),
        });
    }
    let shape = t.shape();
    let (rows, cols) = (shape[0], shape[1]);
    let values = {
        let guard = t.read_data();
        let mut out = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                out.push(guard.data[i * cols + j]);
            }
        }
        out
    };
    finish_op(values, vec![cols, rows], t.requires_grad(), || {
        Arc::new(TransposeBackward { input: t.clone() })
    })
}
