// lincal-train/src/session.rs
//
// Legacy variant: the whole dataset is fed on every iteration and updated with
// plain gradient descent. The session owns the model for its lifetime and
// clears the gradients when it goes out of scope.

use crate::config::FullBatchConfig;
use crate::report::{should_report, ProgressUnit, StepReport, TrainedParameters};
use lincal_core::model::{LineModel, ScalarLine};
use lincal_core::nn::{MSELoss, Module};
use lincal_core::optim::{Optimizer, SgdOptimizer};
use lincal_core::{LinCalError, Tensor};
use lincal_data::{BatchSampler, CalibrationDataset};

/// Scoped full-batch training session over two scalar parameters.
#[derive(Debug)]
pub struct Session {
    model: ScalarLine,
    optimizer: SgdOptimizer,
    loss_fn: MSELoss,
    inputs: Tensor,
    targets: Tensor,
    iterations: usize,
}

impl Session {
    /// Opens a session on `dataset`, runs `body`, and closes the session even if `body` fails.
    pub fn run<T>(
        dataset: &CalibrationDataset,
        config: &FullBatchConfig,
        body: impl FnOnce(&mut Session) -> Result<T, LinCalError>,
    ) -> Result<T, LinCalError> {
        let mut session = Session::open(dataset, config)?;
        body(&mut session)
    }

    fn open(dataset: &CalibrationDataset, config: &FullBatchConfig) -> Result<Self, LinCalError> {
        config.validate()?;
        let batch = BatchSampler::full(dataset)?;
        if batch.is_empty() {
            return Err(LinCalError::ConfigurationError(
                "cannot open a session on an empty dataset".to_string(),
            ));
        }
        let (inputs, targets) = batch.to_tensors()?;
        let model = ScalarLine::new(config.initializer)?;
        let optimizer = SgdOptimizer::new(model.parameters(), config.learning_rate, 0.0)?;
        log::debug!(
            "Session opened: {} rows, lr = {}, init = {}",
            batch.len(),
            config.learning_rate,
            config.initializer
        );
        Ok(Session {
            model,
            optimizer,
            loss_fn: MSELoss::default(),
            inputs,
            targets,
            iterations: 0,
        })
    }

    /// One gradient-descent step over the full dataset. Returns the loss before the update.
    pub fn step(&mut self) -> Result<f64, LinCalError> {
        self.optimizer.zero_grad();
        let predicted = self.model.forward(&self.inputs)?;
        let loss = self.loss_fn.calculate(&predicted, &self.targets)?;
        loss.backward(None)?;
        self.optimizer.step()?;
        self.iterations += 1;
        loss.item()
    }

    pub fn model(&self) -> &ScalarLine {
        &self.model
    }

    pub fn coefficients(&self) -> (f64, f64) {
        self.model.coefficients()
    }

    /// Steps taken since the session was opened.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.model.zero_grad();
        log::debug!("Session closed after {} iterations", self.iterations);
    }
}

/// Runs `config.iterations` full-batch steps on `dataset`.
pub fn run_full_batch(
    dataset: &CalibrationDataset,
    config: &FullBatchConfig,
) -> Result<TrainedParameters, LinCalError> {
    run_full_batch_with(dataset, config, |_| {})
}

/// Same as `run_full_batch`, calling `on_report` at each report point.
pub fn run_full_batch_with(
    dataset: &CalibrationDataset,
    config: &FullBatchConfig,
    mut on_report: impl FnMut(&StepReport),
) -> Result<TrainedParameters, LinCalError> {
    Session::run(dataset, config, |session| {
        let mut losses = Vec::with_capacity(config.iterations);
        let mut reports = Vec::new();
        for i in 0..config.iterations {
            let loss = session.step()?;
            losses.push(loss);
            if should_report(i, config.report_every) {
                let (slope, intercept) = session.coefficients();
                let report = StepReport {
                    unit: ProgressUnit::Iteration,
                    count: i + 1,
                    slope,
                    intercept,
                    loss,
                };
                log::debug!("{}", report);
                on_report(&report);
                reports.push(report);
            }
        }
        let (slope, intercept) = session.coefficients();
        let final_loss = losses.last().copied().unwrap_or(f64::NAN);
        log::info!(
            "Full-batch descent finished after {} iterations: k = {:.6}, b = {:.6}, loss = {:.6}",
            session.iterations(),
            slope,
            intercept,
            final_loss
        );
        Ok(TrainedParameters {
            slope,
            intercept,
            final_loss,
            epoch_losses: losses,
            reports,
        })
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
