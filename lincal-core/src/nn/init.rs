use crate::error::LinCalError;
use crate::tensor::Tensor;
use std::fmt;

/// Initial value policy for parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    Zeros,
    Ones,
    Constant(f64),
}

impl Initializer {
    /// The value every element starts at.
    pub fn value(&self) -> f64 {
        match self {
            Initializer::Zeros => 0.0,
            Initializer::Ones => 1.0,
            Initializer::Constant(v) => *v,
        }
    }

    /// Fills `tensor` in place.
    ///
    /// # Errors
    /// `ConfigurationError` for a non-finite constant, or the error of `fill_`.
    pub fn init(&self, tensor: &Tensor) -> Result<(), LinCalError> {
        let value = self.value();
        if !value.is_finite() {
            return Err(LinCalError::ConfigurationError(format!(
                "initializer constant must be finite, got {}",
                value
            )));
        }
        tensor.fill_(value)
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer::Ones
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Initializer::Zeros => write!(f, "zeros"),
            Initializer::Ones => write!(f, "ones"),
            Initializer::Constant(v) => write!(f, "constant({})", v),
        }
    }
}

/// Fills the input `Tensor` with 0, in place.
pub fn zeros_(tensor: &Tensor) -> Result<(), LinCalError> {
    Initializer::Zeros.init(tensor)
}

/// Fills the input `Tensor` with 1, in place.
pub fn ones_(tensor: &Tensor) -> Result<(), LinCalError> {
    Initializer::Ones.init(tensor)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
