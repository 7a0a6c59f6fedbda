//! # Calibration line with two raw variables and Adam
//!
//! Fits `A = k * c + b` to `./data/demo_lr_data_3.csv`, with `k` and `b` held as
//! two scalar parameters started at one. Each epoch draws 10 random batches of 20
//! rows; progress is printed every 200 epochs.
//!
//! ## Running
//! From the workspace root:
//! `cargo run --example adam_variables`
//!
//! Set `RUST_LOG=debug` to see per-report and session logs.

use lincal_core::LinCalError;
use lincal_data::{CalibrationDataset, Dataset};
use lincal_train::{least_squares, run_training_with, TrainingConfig};

fn main() -> Result<(), LinCalError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = CalibrationDataset::from_csv_path("./data/demo_lr_data_3.csv")?;
    let (k_ref, b_ref) = least_squares(&dataset)?;
    log::info!(
        "{} rows, least-squares reference: k = {:.6}, b = {:.6}",
        dataset.len(),
        k_ref,
        b_ref
    );

    let config = TrainingConfig::raw_variables();
    let fit = run_training_with(&dataset, config, |report| println!("{}", report))?;

    println!("k = {:.6}, b = {:.6}", fit.slope, fit.intercept);
    Ok(())
}
