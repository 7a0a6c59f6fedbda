use crate::error::LinCalError;
use crate::model::{check_batch_input, LineModel};
use crate::nn::{Initializer, Linear, Module, Parameter};
use crate::ops::view::reshape_op;
use crate::tensor::Tensor;

/// Line held as a single-unit dense layer with bias and no activation.
#[derive(Debug)]
pub struct DenseLine {
    dense: Linear,
}

impl DenseLine {
    pub fn new(init: Initializer) -> Result<Self, LinCalError> {
        Ok(DenseLine {
            dense: Linear::new(1, 1, true, init)?,
        })
    }

    fn bias(&self) -> Result<&Parameter, LinCalError> {
        self.dense
            .bias()
            .ok_or_else(|| LinCalError::InternalError("dense line built without bias".to_string()))
    }
}

impl Module for DenseLine {
    fn forward(&self, input: &Tensor) -> Result<Tensor, LinCalError> {
        let n = check_batch_input(input, "DenseLine::forward")?;
        let column = reshape_op(input, vec![n, 1])?;
        let output = self.dense.forward(&column)?;
        reshape_op(&output, vec![n])
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.dense.parameters()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.dense
            .named_parameters()
            .into_iter()
            .map(|(name, param)| (format!("dense.{}", name), param))
            .collect()
    }
}

impl LineModel for DenseLine {
    fn slope(&self) -> f64 {
        self.dense.weights().read_data().data[0]
    }

    fn intercept(&self) -> f64 {
        self.bias().map(|b| b.read_data().data[0]).unwrap_or(0.0)
    }
}
