//! # Full-batch gradient descent in a session
//!
//! The legacy variant: two scalar parameters started at one, the whole dataset
//! fed on every iteration, plain gradient descent with `lr = 0.01` for 10000
//! iterations. Progress is printed every 1000 iterations.
//!
//! `cargo run --example gd_session`

use lincal_core::LinCalError;
use lincal_data::CalibrationDataset;
use lincal_train::{least_squares, run_full_batch_with, FullBatchConfig};

fn main() -> Result<(), LinCalError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = CalibrationDataset::from_csv_path("./data/demo_lr_data_3.csv")?;
    let config = FullBatchConfig::default();
    let fit = run_full_batch_with(&dataset, &config, |report| println!("{}", report))?;

    let (k_ref, b_ref) = least_squares(&dataset)?;
    log::info!(
        "least-squares reference: k = {:.6}, b = {:.6} (gap {:.2e}, {:.2e})",
        k_ref,
        b_ref,
        (fit.slope - k_ref).abs(),
        (fit.intercept - b_ref).abs()
    );
    Ok(())
}
