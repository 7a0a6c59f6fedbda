use crate::error::LinCalError;
use crate::ops::arithmetic::{mul_op, sub_op};
use crate::ops::reduction::{mean_op, sum_op};
use crate::tensor::Tensor;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = LinCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(LinCalError::ConfigurationError(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between input and target tensors.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Reduces `(input - target)^2` to a rank-0 tensor.
    ///
    /// # Errors
    /// `ShapeMismatch` unless both shapes are identical; broadcasting is not applied.
    /// `ArithmeticError` for a mean over empty tensors.
    pub fn calculate(&self, input: &Tensor, target: &Tensor) -> Result<Tensor, LinCalError> {
        if input.shape() != target.shape() {
            return Err(LinCalError::ShapeMismatch {
                expected: target.shape(),
                actual: input.shape(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        let diff = sub_op(input, target)?;
        let squared_diff = mul_op(&diff, &diff)?;
        match self.reduction {
            Reduction::Mean => mean_op(&squared_diff),
            Reduction::Sum => sum_op(&squared_diff),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
