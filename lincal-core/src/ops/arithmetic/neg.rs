use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::finish_op;
use crate::tensor::Tensor;
use std::sync::Arc;

#[derive(Debug)]
struct NegBackward {
    input: Tensor,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        Ok(vec![neg_op(grad_output)?])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.input.clone()]
    }
}

/// Element-wise negation.
pub fn neg_op(t: &Tensor) -> Result<Tensor, LinCalError> {
    let values: Vec<f64> = t.to_vec().iter().map(|v| -v).collect();
    finish_op(values, t.shape(), t.requires_grad(), || {
        Arc::new(NegBackward { input: t.clone() })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};

    #[test]
    fn test_neg_forward_backward() {
        let t = create_test_tensor_with_grad(vec![1.0, -2.0], vec![2]);
        let y = neg_op(&t).unwrap();
        check_tensor_near(&y, &[2], &[-1.0, 2.0], 1e-12);
        y.backward(Some(Tensor::from_slice(&[1.0, 3.0]))).unwrap();
        check_tensor_near(&t.grad().unwrap(), &[2], &[-1.0, -3.0], 1e-12);
    }
}
