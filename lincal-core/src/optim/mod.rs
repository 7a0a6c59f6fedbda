//! Optimizers for training models.
//!
//! This module provides the `Optimizer` trait, the `OptimizerState` snapshot type,
//! and the two update rules the trainers use: plain/momentum SGD and Adam.

pub mod adam;
pub mod optimizer_state;
pub mod optimizer_trait;
pub mod sgd;

pub use adam::AdamOptimizer;
pub use optimizer_state::{AdamParamState, OptimizerState};
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

use crate::error::LinCalError;

/// # Errors
/// `ConfigurationError` unless `lr` is a positive finite number.
pub fn validate_learning_rate(lr: f64) -> Result<(), LinCalError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(LinCalError::ConfigurationError(format!(
            "Learning rate must be positive, got {}",
            lr
        )));
    }
    Ok(())
}
