use crate::error::LinCalError;
use crate::model::{check_batch_input, LineModel};
use crate::nn::{Initializer, Module, Parameter};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::tensor::{zeros, Tensor};

/// Line held as two free scalar parameters, each of shape `[1]`.
#[derive(Debug)]
pub struct ScalarLine {
    slope: Parameter,
    intercept: Parameter,
}

impl ScalarLine {
    pub fn new(init: Initializer) -> Result<Self, LinCalError> {
        let k = zeros(&[1])?;
        let b = zeros(&[1])?;
        init.init(&k)?;
        init.init(&b)?;
        Ok(ScalarLine {
            slope: Parameter::new_with_name(k, "k"),
            intercept: Parameter::new_with_name(b, "b"),
        })
    }

    /// Starts from explicit values instead of an initializer.
    pub fn with_values(slope: f64, intercept: f64) -> Self {
        ScalarLine {
            slope: Parameter::new_with_name(Tensor::from_slice(&[slope]), "k"),
            intercept: Parameter::new_with_name(Tensor::from_slice(&[intercept]), "b"),
        }
    }
}

impl Module for ScalarLine {
    fn forward(&self, input: &Tensor) -> Result<Tensor, LinCalError> {
        check_batch_input(input, "ScalarLine::forward")?;
        let scaled = mul_op(&self.slope, input)?;
        add_op(&scaled, &self.intercept)
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![self.slope.clone(), self.intercept.clone()]
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        vec![
            ("k".to_string(), self.slope.clone()),
            ("b".to_string(), self.intercept.clone()),
        ]
    }
}

impl LineModel for ScalarLine {
    fn slope(&self) -> f64 {
        self.slope.read_data().data[0]
    }

    fn intercept(&self) -> f64 {
        self.intercept.read_data().data[0]
    }
}
