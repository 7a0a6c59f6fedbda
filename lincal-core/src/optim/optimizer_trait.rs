use crate::error::LinCalError;
use crate::optim::optimizer_state::OptimizerState;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer: std::fmt::Debug {
    /// Performs a single optimization step.
    ///
    /// Parameters whose gradient is `None` are left untouched.
    fn step(&mut self) -> Result<(), LinCalError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Called before each backward pass so gradients do not accumulate across steps.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    /// # Errors
    /// `ConfigurationError` if `lr` is not a positive finite number.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), LinCalError>;

    /// Returns the optimizer's current state as an `OptimizerState` snapshot.
    ///
    /// The snapshot can be given back to `load_state_dict` to resume the
    /// optimizer's progress (momentum buffers, Adam moments and step count).
    fn state_dict(&self) -> Result<OptimizerState, LinCalError>;

    /// Loads the optimizer's state from an `OptimizerState` snapshot.
    ///
    /// # Errors
    /// `ConfigurationError` if the snapshot belongs to another optimizer kind or
    /// does not match the managed parameters.
    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), LinCalError>;
}
