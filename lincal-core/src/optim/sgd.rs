use crate::error::LinCalError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_state::OptimizerState;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::validate_learning_rate;
use crate::tensor::Tensor;

/// Implements Stochastic Gradient Descent (SGD), optionally with momentum.
///
/// Without momentum the update is `p -= lr * g`. With momentum a buffer
/// `buf = momentum * buf + g` is kept per parameter and `p -= lr * buf`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    momentum_buffers: Vec<Option<Vec<f64>>>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive or `momentum` is outside `[0, 1)`.
    pub fn new(params: Vec<Parameter>, lr: f64, momentum: f64) -> Result<Self, LinCalError> {
        validate_learning_rate(lr)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(LinCalError::ConfigurationError(format!(
                "Momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        let momentum_buffers = vec![None; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            momentum_buffers,
        })
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), LinCalError> {
        for (index, param) in self.params.iter().enumerate() {
            let Some(grad) = param.grad() else {
                continue;
            };
            let grad = grad.to_vec();

            let direction = if self.momentum != 0.0 {
                let buffer = self.momentum_buffers[index].get_or_insert_with(|| vec![0.0; grad.len()]);
                for (b, g) in buffer.iter_mut().zip(grad.iter()) {
                    *b = self.momentum * *b + g;
                }
                buffer.clone()
            } else {
                grad
            };

            let delta: Vec<f64> = direction.iter().map(|d| self.lr * d).collect();
            param.sub_(&Tensor::new(delta, param.shape())?)?;
        }
        log::trace!("SGD step applied to {} parameters", self.params.len());
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), LinCalError> {
        validate_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }

    fn state_dict(&self) -> Result<OptimizerState, LinCalError> {
        Ok(OptimizerState::Sgd {
            lr: self.lr,
            momentum: self.momentum,
            momentum_buffers: self.momentum_buffers.clone(),
        })
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), LinCalError> {
        let OptimizerState::Sgd {
            lr,
            momentum,
            momentum_buffers,
        } = state_dict
        else {
            return Err(LinCalError::ConfigurationError(format!(
                "Cannot load a {} state into SGD",
                state_dict.kind()
            )));
        };
        if momentum_buffers.len() != self.params.len() {
            return Err(LinCalError::ConfigurationError(format!(
                "SGD state holds {} buffers for {} parameters",
                momentum_buffers.len(),
                self.params.len()
            )));
        }
        for (param, buffer) in self.params.iter().zip(momentum_buffers) {
            if let Some(buffer) = buffer {
                if buffer.len() != param.numel() {
                    return Err(LinCalError::ConfigurationError(format!(
                        "momentum buffer of length {} for a parameter of {} elements",
                        buffer.len(),
                        param.numel()
                    )));
                }
            }
        }
        validate_learning_rate(*lr)?;
        self.lr = *lr;
        self.momentum = *momentum;
        self.momentum_buffers = momentum_buffers.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
