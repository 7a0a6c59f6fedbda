use crate::error::LinCalError;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable tensor operation.
///
/// Any operation that creates a non-leaf `Tensor` stores an implementation of this
/// trait in the output's `grad_fn`. `Tensor::backward` walks these nodes to apply the
/// chain rule.
///
/// The `Debug + Send + Sync` bounds let the node live behind an `Arc` shared by every
/// handle of the output tensor.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes dL/dInput for each input, given dL/dOutput (`grad_output`).
    ///
    /// # Returns
    /// One gradient per input. The order **must** match `inputs()` and each gradient
    /// must have the shape of its input (broadcast dimensions already summed out).
    fn backward(&self, grad_output: &Tensor) -> Result<Vec<Tensor>, LinCalError>;

    /// The tensors that took part in the forward operation, in argument order.
    ///
    /// Holding strong handles keeps the inputs alive for as long as the output
    /// (and therefore its graph) is alive.
    fn inputs(&self) -> Vec<Tensor>;
}
