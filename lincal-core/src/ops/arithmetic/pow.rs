use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::ops::arithmetic::mul_op;
use crate::ops::finish_op;
use crate::tensor::Tensor;
use std::sync::Arc;

/// Backward operation context for `x^exponent`.
#[derive(Debug)]
struct PowScalarBackward {
    base: Tensor,
    exponent: f64,
}

impl BackwardOp for PowScalarBackward {
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
        // d(x^p)/dx = p * x^(p-1)
        let local: Vec<f64> = self
            .base
            .to_vec()
            .iter()
            .map(|x| self.exponent * x.powf(self.exponent - 1.0))
            .collect();
        let local = Tensor::new(local, self.base.shape())?;
        Ok(vec![mul_op(grad_output, &local)?])
    }

    fn inputs(&self) -> Vec<Tensor> {
        vec![self.base.clone()]
    }
}

/// Raises every element to a constant power.
///
/// # Errors
/// `ArithmeticError` if the exponent is not finite.
pub fn pow_scalar_op(base: &Tensor, exponent: f64) -> Result<Tensor, LinCalError> {
    if !exponent.is_finite() {
        return Err(LinCalError::ArithmeticError(format!(
            "pow exponent must be finite, got {}",
            exponent
        )));
    }
    let values: Vec<f64> = base.to_vec().iter().map(|x| x.powf(exponent)).collect();
    finish_op(values, base.shape(), base.requires_grad(), || {
        Arc::new(PowScalarBackward {
            base: base.clone(),
            exponent,
        })
    })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
