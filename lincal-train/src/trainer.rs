// lincal-train/src/trainer.rs

use crate::config::{ModelKind, OptimizerKind, TrainingConfig};
use crate::report::{should_report, ProgressUnit, StepReport, TrainedParameters};
use lincal_core::model::{DenseLine, LineModel, ScalarLine};
use lincal_core::nn::{Initializer, MSELoss, Parameter};
use lincal_core::optim::{AdamOptimizer, Optimizer, SgdOptimizer};
use lincal_core::LinCalError;
use lincal_data::{Batch, BatchSampler, CalibrationDataset};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Builds a line model with every parameter set by `initializer`.
pub fn build_model(
    kind: ModelKind,
    initializer: Initializer,
) -> Result<Box<dyn LineModel>, LinCalError> {
    Ok(match kind {
        ModelKind::ScalarLine => Box::new(ScalarLine::new(initializer)?),
        ModelKind::DenseLine => Box::new(DenseLine::new(initializer)?),
    })
}

/// Builds the optimizer described by `kind` over `params`.
pub fn build_optimizer(
    kind: OptimizerKind,
    params: Vec<Parameter>,
) -> Result<Box<dyn Optimizer>, LinCalError> {
    Ok(match kind {
        OptimizerKind::Adam {
            lr,
            beta1,
            beta2,
            eps,
        } => Box::new(AdamOptimizer::new(params, lr, beta1, beta2, eps)?),
        OptimizerKind::Sgd { lr, momentum } => Box::new(SgdOptimizer::new(params, lr, momentum)?),
    })
}

/// Mini-batch training of one line model.
///
/// Each epoch draws `batches_per_epoch` independent batches; every batch gets one
/// forward pass, one MSE backward pass and one optimizer step.
#[derive(Debug)]
pub struct TrainingLoop {
    model: Box<dyn LineModel>,
    optimizer: Box<dyn Optimizer>,
    sampler: BatchSampler,
    loss_fn: MSELoss,
    config: TrainingConfig,
}

impl TrainingLoop {
    /// Validates `config` and builds the model, optimizer and sampler it describes.
    pub fn new(config: TrainingConfig) -> Result<Self, LinCalError> {
        config.validate()?;
        let model = build_model(config.model, config.initializer)?;
        let optimizer = build_optimizer(config.optimizer, model.parameters())?;
        let sampler = BatchSampler::new(config.batch_size)?;
        log::debug!(
            "Training loop ready: {:?} ({}), {}, {} epochs x {} batches of {}",
            config.model,
            config.initializer,
            config.optimizer,
            config.epochs,
            config.batches_per_epoch,
            config.batch_size
        );
        Ok(TrainingLoop {
            model,
            optimizer,
            sampler,
            loss_fn: MSELoss::default(),
            config,
        })
    }

    pub fn model(&self) -> &dyn LineModel {
        self.model.as_ref()
    }

    pub fn optimizer(&self) -> &dyn Optimizer {
        self.optimizer.as_ref()
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// One update on `batch`. Returns the batch loss measured before the update.
    pub fn train_step(&mut self, batch: &Batch) -> Result<f64, LinCalError> {
        let (inputs, targets) = batch.to_tensors()?;
        self.optimizer.zero_grad();
        let predicted = self.model.forward(&inputs)?;
        let loss = self.loss_fn.calculate(&predicted, &targets)?;
        loss.backward(None)?;
        self.optimizer.step()?;
        loss.item()
    }

    /// Runs every epoch, calling `on_report` at each report point.
    pub fn run(
        &mut self,
        dataset: &CalibrationDataset,
        rng: &mut dyn RngCore,
        mut on_report: impl FnMut(&StepReport),
    ) -> Result<TrainedParameters, LinCalError> {
        let epochs = self.config.epochs;
        let batches = self.config.batches_per_epoch;
        let mut epoch_losses = Vec::with_capacity(epochs);
        let mut reports = Vec::new();
        let mut last_loss = f64::NAN;

        for epoch in 0..epochs {
            let mut total = 0.0;
            for _ in 0..batches {
                let batch = self.sampler.draw(dataset, rng)?;
                last_loss = self.train_step(&batch)?;
                total += last_loss;
            }
            let mean_loss = total / batches as f64;
            epoch_losses.push(mean_loss);
            log::trace!("epoch {} mean loss {:.6}", epoch + 1, mean_loss);

            if should_report(epoch, self.config.report_every) {
                let (slope, intercept) = self.model.coefficients();
                let report = StepReport {
                    unit: ProgressUnit::Epoch,
                    count: epoch + 1,
                    slope,
                    intercept,
                    loss: last_loss,
                };
                log::debug!("{}", report);
                on_report(&report);
                reports.push(report);
            }
        }

        let (slope, intercept) = self.model.coefficients();
        log::info!(
            "Training finished after {} epochs ({} steps): k = {:.6}, b = {:.6}, loss = {:.6}",
            epochs,
            epochs * batches,
            slope,
            intercept,
            last_loss
        );
        Ok(TrainedParameters {
            slope,
            intercept,
            final_loss: last_loss,
            epoch_losses,
            reports,
        })
    }
}

/// Trains a fresh model on `dataset` as described by `config`.
pub fn run_training(
    dataset: &CalibrationDataset,
    config: TrainingConfig,
) -> Result<TrainedParameters, LinCalError> {
    run_training_with(dataset, config, |_| {})
}

/// Same as `run_training`, calling `on_report` at each report point.
pub fn run_training_with(
    dataset: &CalibrationDataset,
    config: TrainingConfig,
    on_report: impl FnMut(&StepReport),
) -> Result<TrainedParameters, LinCalError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    TrainingLoop::new(config)?.run(dataset, &mut rng, on_report)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
