// Core crate: f64 tensors with reverse-mode autodiff, nn building blocks,
// straight-line models and optimizers.
pub mod autograd;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub mod error;

// Re-exported so callers can write `lincal_core::Tensor`
pub use error::LinCalError;
pub use tensor::Tensor;
