use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::finish_op;
use crate::ops::linalg::transpose_op;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward operation context for matrix multiplication.
#[derive(Debug)]
struct MatmulBackward {
    a: Tensor,
    b: Tensor,
}

impl BackwardOp for MatmulBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        // grad_a = grad_output @ b^T, grad_b = a^T @ grad_output
        let b_t = transpose_op(&self.b.detach())?;
        let a_t = transpose_op(&self.a.detach())?;
        let grad_a = matmul_op(grad_output, &b_t)?;
        let grad_b = matmul_op(&a_t, grad_output)?;
        Ok(vec![grad_a, grad_b])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.a.clone(), self.b.clone()]
    }
}

fn matmul_kernel(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            for j in 0..n {
                out[i * n + j] += a_ip * b[p * n + j];
            }
        }
    }
    out
}

/// Matrix product of `a` (`[m, k]`) and `b` (`[k, n]`), giving `[m, n]`.
///
/// # Errors
/// `ShapeMismatch` if either input is not rank 2 or the inner dimensions differ.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, LinCalError> {
    let a_shape = a.shape();
    let b_shape = b.shape();
    if a.rank() != 2 || b.rank() != 2 || a_shape[1] != b_shape[0] {
        return Err(LinCalError::ShapeMismatch {
            expected: a_shape,
            actual: b_shape,
            operation: "matmul".to_string(),
        });
    }
    let (m, k, n) = (a_shape[0], a_shape[1], b_shape[1]);
    let values = {
        let a_guard = a.read_data();
        let b_guard = b.read_data();
        matmul_kernel(&a_guard.data, &b_guard.data, m, k, n)
    };
    finish_op(values, vec![m, n], a.requires_grad() || b.requires_grad(), || {
        Arc::new(MatmulBackward {
            a: a.clone(),
            b: b.clone(),
        })
    })
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
