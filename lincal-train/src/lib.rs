//! Training side of the calibration fit.
//!
//! `run_training` drives a [`LineModel`](lincal_core::model::LineModel) over random
//! batches with Adam or SGD; `run_full_batch` replays the legacy variant, one
//! gradient-descent step over the whole dataset per iteration inside a scoped
//! [`Session`]. `least_squares` gives the closed-form answer both should approach.

pub mod closed_form;
pub mod config;
pub mod report;
pub mod session;
pub mod trainer;

pub use closed_form::least_squares;
pub use config::{FullBatchConfig, ModelKind, OptimizerKind, TrainingConfig};
pub use report::{ProgressUnit, StepReport, TrainedParameters};
pub use session::{run_full_batch, run_full_batch_with, Session};
pub use trainer::{build_model, build_optimizer, run_training, run_training_with, TrainingLoop};
