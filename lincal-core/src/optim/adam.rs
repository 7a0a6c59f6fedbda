use crate::error::LinCalError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_state::{AdamParamState, OptimizerState};
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::validate_learning_rate;
use crate::tensor::Tensor;

/// Default learning rate of `AdamOptimizer::with_defaults`.
pub const DEFAULT_LR: f64 = 1e-3;
pub const DEFAULT_BETA1: f64 = 0.9;
pub const DEFAULT_BETA2: f64 = 0.999;
pub const DEFAULT_EPS: f64 = 1e-7;

/// Adam Optimizer.
///
/// Keeps bias-corrected first and second moment estimates per parameter:
///
/// ```text
/// m = beta1 * m + (1 - beta1) * g
/// v = beta2 * v + (1 - beta2) * g^2
/// p -= lr * (m / (1 - beta1^t)) / (sqrt(v / (1 - beta2^t)) + eps)
/// ```
#[derive(Debug)]
pub struct AdamOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    iterations: u64,
    state: Vec<Option<AdamParamState>>,
}

impl AdamOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` or `eps` is not positive, or a beta is outside `[0, 1)`.
    pub fn new(
        params: Vec<Parameter>,
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
    ) -> Result<Self, LinCalError> {
        validate_learning_rate(lr)?;
        if !(0.0..1.0).contains(&beta1) {
            return Err(LinCalError::ConfigurationError(
                "Beta1 must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&beta2) {
            return Err(LinCalError::ConfigurationError(
                "Beta2 must be in [0, 1)".to_string(),
            ));
        }
        if !eps.is_finite() || eps <= 0.0 {
            return Err(LinCalError::ConfigurationError(
                "Epsilon must be positive".to_string(),
            ));
        }
        let state = vec![None; params.len()];
        Ok(AdamOptimizer {
            params,
            lr,
            beta1,
            beta2,
            eps,
            iterations: 0,
            state,
        })
    }

    /// `lr = 0.001`, `beta1 = 0.9`, `beta2 = 0.999`, `eps = 1e-7`.
    pub fn with_defaults(params: Vec<Parameter>) -> Result<Self, LinCalError> {
        Self::new(params, DEFAULT_LR, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPS)
    }

    /// Number of steps taken so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), LinCalError> {
        if self.params.is_empty() {
            return Ok(());
        }
        self.iterations += 1;

        let t = self.iterations as i32;
        let bias_correction1 = 1.0 - self.beta1.powi(t);
        let bias_correction2 = 1.0 - self.beta2.powi(t);
        if bias_correction1 <= 0.0 || bias_correction2 <= 0.0 {
            return Err(LinCalError::ArithmeticError(
                "bias correction vanished".to_string(),
            ));
        }

        for (index, param) in self.params.iter().enumerate() {
            let Some(grad) = param.grad() else {
                continue;
            };
            let grad = grad.to_vec();
            let entry = self.state[index].get_or_insert_with(|| AdamParamState {
                m: vec![0.0; grad.len()],
                v: vec![0.0; grad.len()],
            });

            let mut update = Vec::with_capacity(grad.len());
            for ((m, v), g) in entry.m.iter_mut().zip(entry.v.iter_mut()).zip(grad.iter()) {
                *m = self.beta1 * *m + (1.0 - self.beta1) * g;
                *v = self.beta2 * *v + (1.0 - self.beta2) * g * g;
                let m_hat = *m / bias_correction1;
                let v_hat = *v / bias_correction2;
                update.push(self.lr * m_hat / (v_hat.sqrt() + self.eps));
            }
            param.sub_(&Tensor::new(update, param.shape())?)?;
        }
        log::trace!("Adam step {} applied", self.iterations);
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
        Ok(OptimizerState::Adam {
            lr: self.lr,
            beta1: self.beta1,
            beta2: self.beta2,
            eps: self.eps,
            iterations: self.iterations,
            param_states: self.state.clone(),
        })
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), LinCalError> {
        let OptimizerState::Adam {
            lr,
            beta1,
            beta2,
            eps,
            iterations,
            param_states,
        } = state_dict
        else {
            return Err(LinCalError::ConfigurationError(format!(
                "Cannot load a {} state into Adam",
                state_dict.kind()
            )));
        };
        if param_states.len() != self.params.len() {
            return Err(LinCalError::ConfigurationError(format!(
                "Adam state holds {} entries for {} parameters",
                param_states.len(),
                self.params.len()
            )));
        }
        for (param, entry) in self.params.iter().zip(param_states) {
            if let Some(entry) = entry {
                if entry.m.len() != param.numel() || entry.v.len() != param.numel() {
                    return Err(LinCalError::ConfigurationError(format!(
                        "Adam moments do not match a parameter of {} elements",
                        param.numel()
                    )));
                }
            }
        }
        // Re-validate through the constructor rules.
        AdamOptimizer::new(Vec::new(), *lr, *beta1, *beta2, *eps)?;

        self.lr = *lr;
        self.beta1 = *beta1;
        self.beta2 = *beta2;
        self.eps = *eps;
        self.iterations = *iterations;
        self.state = param_states.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
