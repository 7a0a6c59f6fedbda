// src/nn/mod.rs
// Building blocks for trainable models: parameters, modules, layers and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use init::Initializer;
pub use layers::linear::Linear;
pub use losses::{MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
