use approx::relative_eq;
use crate::error::LinCalError;
use crate::tensor::Tensor;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad:?} != numerical {numerical_grad:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(LinCalError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(LinCalError),
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(LinCalError),
    #[error("Input tensor {input_index} requires grad but has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is not finite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input tensor must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<LinCalError> for GradCheckError {
    fn from(err: LinCalError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// The scalar objective is `sum(func(inputs) * output_grad)`, so the analytical
/// gradients come from `func(inputs).backward(Some(output_grad))`.
///
/// An element passes when the absolute or the relative difference is within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    output_grad: &Tensor,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, LinCalError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    if inputs.iter().any(|t| t.requires_grad()) && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if output.requires_grad() {
        output
            .backward(Some(output_grad.clone()))
            .map_err(GradCheckError::BackwardPassError)?;
    }
    let weights = output_grad.to_vec();

    for (i, original) in inputs.iter().enumerate() {
        if !original.requires_grad() {
            continue;
        }
        let analytical = original
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?
            .to_vec();
        let base = original.to_vec();

        for elem_idx in 0..base.len() {
            let loss_plus = perturbed_loss(&func, inputs, i, &base, elem_idx, epsilon, &weights)?;
            let loss_minus = perturbed_loss(&func, inputs, i, &base, elem_idx, -epsilon, &weights)?;
            let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }

            let analytical_grad = analytical[elem_idx];
            if !relative_eq!(
                analytical_grad,
                numerical,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad: numerical,
                    difference: (analytical_grad - numerical).abs(),
                });
            }
        }
    }

    Ok(())
}

fn perturbed_loss<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    base: &[f64],
    element_index: usize,
    delta: f64,
    weights: &[f64],
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, LinCalError>,
{
    let mut values = base.to_vec();
    values[element_index] += delta;
    let perturbed = Tensor::new(values, inputs[input_index].shape())?;

    let mut shifted: Vec<Tensor> = inputs.to_vec();
    shifted[input_index] = perturbed;

    let output = func(&shifted).map_err(GradCheckError::ForwardPassError)?;
    let output_values = output.to_vec();
    if output_values.len() != weights.len() {
        return Err(GradCheckError::TensorError(LinCalError::ShapeMismatch {
            expected: vec![weights.len()],
            actual: output.shape(),
            operation: "check_grad".to_string(),
        }));
    }
    Ok(output_values.iter().zip(weights).map(|(o, w)| o * w).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::mul_op;

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // A deliberately wrong op: forward is x*x, backward claims 1.
        #[derive(Debug)]
        struct WrongSquare {
            input: Tensor,
        }
        impl crate::autograd::BackwardOp for WrongSquare {
            fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
                Ok(vec![grad_output.detach()])
            }
            fn inputs(&self) -> Vec<Tensor> {
                vec![self.input.clone()]
            }
        }

        let wrong = |inputs: &[Tensor]| -> Result<Tensor, LinCalError> {
            let x = &inputs[0];
            let values: Vec<f64> = x.to_vec().iter().map(|v| v * v).collect();
            let out = Tensor::new(values, x.shape())?;
            out.set_grad_fn(std::sync::Arc::new(WrongSquare { input: x.clone() }));
            Ok(out)
        };

        let x = Tensor::from_slice(&[3.0]);
        x.requires_grad_(true).unwrap();
        let result = check_grad(wrong, &[x], &Tensor::from_slice(&[1.0]), 1e-5, 1e-4);
        assert!(matches!(result, Err(GradCheckError::GradientMismatch { .. })));
    }

    #[test]
    fn test_check_grad_accepts_mul() {
        let a = Tensor::from_slice(&[1.5, -2.0]);
        let b = Tensor::from_slice(&[0.5, 4.0]);
        a.requires_grad_(true).unwrap();
        b.requires_grad_(true).unwrap();
        let output_grad = Tensor::from_slice(&[1.0, 0.5]);
        check_grad(|t| mul_op(&t[0], &t[1]), &[a, b], &output_grad, 1e-6, 1e-6).unwrap();
    }

    #[test]
    fn test_check_grad_rejects_non_leaf_input() {
        let a = Tensor::from_slice(&[1.0]);
        a.requires_grad_(true).unwrap();
        let b = mul_op(&a, &a).unwrap();
        let result = check_grad(|t| Ok(t[0].clone()), &[b], &Tensor::from_slice(&[1.0]), 1e-6, 1e-6);
        assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
    }
}
