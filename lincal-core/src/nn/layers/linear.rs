use crate::error::LinCalError;
use crate::nn::init::Initializer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::{matmul_op, transpose_op};
use crate::tensor::{zeros, Tensor};

/// Applies a linear transformation to the incoming data: `y = x W^T + b`.
///
/// `weights` has shape `[out_features, in_features]` and `bias` has shape
/// `[1, out_features]`, broadcast over the batch dimension.
#[derive(Debug)]
pub struct Linear {
    pub(crate) weights: Parameter,
    pub(crate) bias: Option<Parameter>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer with every weight and bias set by `init`.
    ///
    /// # Errors
    /// `ConfigurationError` if either feature count is zero.
    pub fn new(
        in_features: usize,
        out_features: usize,
        has_bias: bool,
        init: Initializer,
    ) -> Result<Self, LinCalError> {
        if in_features == 0 || out_features == 0 {
            return Err(LinCalError::ConfigurationError(format!(
                "Linear layer needs non-zero features, got in={} out={}",
                in_features, out_features
            )));
        }
        let weights_tensor = zeros(&[out_features, in_features])?;
        init.init(&weights_tensor)?;
        let weights = Parameter::new_with_name(weights_tensor, "weight");

        let bias = if has_bias {
            let bias_tensor = zeros(&[1, out_features])?;
            init.init(&bias_tensor)?;
            Some(Parameter::new_with_name(bias_tensor, "bias"))
        } else {
            None
        };

        Ok(Linear {
            weights,
            bias,
            in_features,
            out_features,
        })
    }

    pub fn weights(&self) -> &Parameter {
        &self.weights
    }

    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, LinCalError> {
        let shape = input.shape();
        if shape.len() != 2 || shape[1] != self.in_features {
            return Err(LinCalError::ShapeMismatch {
                expected: vec![shape.first().copied().unwrap_or(0), self.in_features],
                actual: shape,
                operation: "Linear::forward".to_string(),
            });
        }
        let weights_t = transpose_op(&self.weights)?;
        let output = matmul_op(input, &weights_t)?;
        match &self.bias {
            Some(bias) => add_op(&output, bias),
            None => Ok(output),
        }
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = vec![self.weights.clone()];
        if let Some(bias) = &self.bias {
            params.push(bias.clone());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named = vec![("weight".to_string(), self.weights.clone())];
        if let Some(bias) = &self.bias {
            named.push(("bias".to_string(), bias.clone()));
        }
        named
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
