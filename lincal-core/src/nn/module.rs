use crate::error::LinCalError;
use crate::nn::Parameter;
use crate::tensor::Tensor;

/// The base trait for all trainable modules (layers and models).
///
/// This trait defines the operations every module supports: a forward pass and
/// access to its learnable parameters.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    fn forward(&self, input: &Tensor) -> Result<Tensor, LinCalError>;

    /// Returns handles to all learnable parameters of the module, sub-modules included.
    /// The handles share storage with the module.
    fn parameters(&self) -> Vec<Parameter>;

    /// Parameters with hierarchical names (e.g., `"dense.weight"`).
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    /// Clears the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
