//! # Calibration line as a one-unit dense layer
//!
//! Same fit as `adam_variables`, but the line is a `Linear(1, 1)` layer with bias
//! and no activation, started at zero.
//!
//! `cargo run --example adam_dense`

use lincal_core::LinCalError;
use lincal_data::CalibrationDataset;
use lincal_train::{least_squares, run_training_with, TrainingConfig};

fn main() -> Result<(), LinCalError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = CalibrationDataset::from_csv_path("./data/demo_lr_data_3.csv")?;
    let (k_ref, b_ref) = least_squares(&dataset)?;
    log::info!("least-squares reference: k = {:.6}, b = {:.6}", k_ref, b_ref);

    let fit = run_training_with(&dataset, TrainingConfig::dense_layer(), |report| {
        println!("{}", report)
    })?;

    // Read-back: the concentration of a sample measured at A = 0.5.
    if let Some(c) = fit.concentration_for(0.5) {
        log::info!("A = 0.5 corresponds to c = {:.4}", c);
    }
    Ok(())
}
