// lincal-train/src/config.rs
//
// Plain configuration structs. Defaults reproduce the demo runs; `validate`
// is called by the trainers before anything is built.

use lincal_core::nn::Initializer;
use lincal_core::optim::adam::{DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPS, DEFAULT_LR};
use lincal_core::optim::validate_learning_rate;
use lincal_core::LinCalError;
use std::fmt;

/// Which `LineModel` implementation to train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// Two free scalars `k` and `b`.
    #[default]
    ScalarLine,
    /// A `Linear(1, 1)` layer with bias.
    DenseLine,
}

/// Optimizer and its hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimizerKind {
    Adam {
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
    },
    Sgd {
        lr: f64,
        momentum: f64,
    },
}

impl OptimizerKind {
    /// Adam with default betas and epsilon.
    pub fn adam(lr: f64) -> Self {
        OptimizerKind::Adam {
            lr,
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            eps: DEFAULT_EPS,
        }
    }

    /// Plain gradient descent.
    pub fn sgd(lr: f64) -> Self {
        OptimizerKind::Sgd { lr, momentum: 0.0 }
    }

    pub fn learning_rate(&self) -> f64 {
        match self {
            OptimizerKind::Adam { lr, .. } | OptimizerKind::Sgd { lr, .. } => *lr,
        }
    }
}

impl Default for OptimizerKind {
    fn default() -> Self {
        OptimizerKind::adam(DEFAULT_LR)
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizerKind::Adam { lr, .. } => write!(f, "Adam(lr={})", lr),
            OptimizerKind::Sgd { lr, momentum } => write!(f, "SGD(lr={}, momentum={})", lr, momentum),
        }
    }
}

/// Mini-batch training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub model: ModelKind,
    pub initializer: Initializer,
    pub optimizer: OptimizerKind,
    pub epochs: usize,
    pub batches_per_epoch: usize,
    pub batch_size: usize,
    /// Report when `epoch > 0 && (epoch + 1) % report_every == 0`.
    pub report_every: usize,
    /// Seed for batch sampling; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            model: ModelKind::ScalarLine,
            initializer: Initializer::Ones,
            optimizer: OptimizerKind::default(),
            epochs: 2000,
            batches_per_epoch: 10,
            batch_size: 20,
            report_every: 200,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Two raw scalars started at one, Adam.
    pub fn raw_variables() -> Self {
        TrainingConfig::default()
    }

    /// One dense unit started at zero, Adam.
    pub fn dense_layer() -> Self {
        TrainingConfig {
            model: ModelKind::DenseLine,
            initializer: Initializer::Zeros,
            ..TrainingConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    /// `ConfigurationError` if a count is zero or the learning rate is not positive.
    pub fn validate(&self) -> Result<(), LinCalError> {
        check_positive("epochs", self.epochs)?;
        check_positive("batches_per_epoch", self.batches_per_epoch)?;
        check_positive("batch_size", self.batch_size)?;
        check_positive("report_every", self.report_every)?;
        validate_learning_rate(self.optimizer.learning_rate())?;
        if self.report_every > self.epochs {
            log::warn!(
                "report_every ({}) exceeds epochs ({}); no progress will be reported",
                self.report_every,
                self.epochs
            );
        }
        Ok(())
    }
}

/// Full-batch gradient descent inside a `Session`.
#[derive(Debug, Clone, PartialEq)]
pub struct FullBatchConfig {
    pub initializer: Initializer,
    pub learning_rate: f64,
    pub iterations: usize,
    pub report_every: usize,
}

impl Default for FullBatchConfig {
    fn default() -> Self {
        FullBatchConfig {
            initializer: Initializer::Ones,
            learning_rate: 0.01,
            iterations: 10_000,
            report_every: 1000,
        }
    }
}

impl FullBatchConfig {
    /// # Errors
    /// `ConfigurationError` if a count is zero or the learning rate is not positive.
    pub fn validate(&self) -> Result<(), LinCalError> {
        check_positive("iterations", self.iterations)?;
        check_positive("report_every", self.report_every)?;
        validate_learning_rate(self.learning_rate)?;
        if self.report_every > self.iterations {
            log::warn!(
                "report_every ({}) exceeds iterations ({}); no progress will be reported",
                self.report_every,
                self.iterations
            );
        }
        Ok(())
    }
}

fn check_positive(name: &str, value: usize) -> Result<(), LinCalError> {
    if value == 0 {
        return Err(LinCalError::ConfigurationError(format!(
            "{} must be greater than zero",
            name
        )));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_runs() {
        let raw = TrainingConfig::raw_variables();
        assert_eq!(raw.model, ModelKind::ScalarLine);
        assert_eq!(raw.initializer, Initializer::Ones);
        assert_eq!(raw.optimizer.learning_rate(), 0.001);
        assert_eq!((raw.epochs, raw.batches_per_epoch, raw.batch_size), (2000, 10, 20));
        assert_eq!(raw.report_every, 200);

        let dense = TrainingConfig::dense_layer();
        assert_eq!(dense.model, ModelKind::DenseLine);
        assert_eq!(dense.initializer, Initializer::Zeros);

        let full = FullBatchConfig::default();
        assert_eq!(full.learning_rate, 0.01);
        assert_eq!((full.iterations, full.report_every), (10_000, 1000));
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        for config in [
            TrainingConfig { epochs: 0, ..TrainingConfig::default() },
            TrainingConfig { batches_per_epoch: 0, ..TrainingConfig::default() },
            TrainingConfig { batch_size: 0, ..TrainingConfig::default() },
            TrainingConfig { report_every: 0, ..TrainingConfig::default() },
        ] {
            assert!(matches!(config.validate(), Err(LinCalError::ConfigurationError(_))));
        }
        let full = FullBatchConfig { iterations: 0, ..FullBatchConfig::default() };
        assert!(full.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_learning_rate() {
        let config = TrainingConfig {
            optimizer: OptimizerKind::sgd(-0.1),
            ..TrainingConfig::default()
        };
        assert!(config.validate().is_err());
        for lr in [0.0, f64::NAN, f64::INFINITY] {
            let full = FullBatchConfig { learning_rate: lr, ..FullBatchConfig::default() };
            assert_eq!(full.validate(), validate_learning_rate(lr));
            assert!(matches!(full.validate(), Err(LinCalError::ConfigurationError(_))));
        }
    }

    #[test]
    fn test_report_interval_larger_than_epochs_is_allowed() {
        let config = TrainingConfig { epochs: 5, report_every: 10, ..TrainingConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optimizer_kind_display() {
        assert_eq!(OptimizerKind::adam(0.01).to_string(), "Adam(lr=0.01)");
        assert_eq!(OptimizerKind::sgd(0.5).to_string(), "SGD(lr=0.5, momentum=0)");
    }
}
