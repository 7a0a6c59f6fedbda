// lincal-train/src/session_test.rs

use super::*;
use crate::closed_form::least_squares;
use lincal_data::CalibrationRow;

fn dataset() -> CalibrationDataset {
    CalibrationDataset::new(
        [(0.0, 0.21), (0.2, 0.31), (0.4, 0.45), (0.6, 0.55), (0.8, 0.69)]
            .iter()
            .map(|&(concentration, absorbance)| CalibrationRow {
                concentration,
                absorbance,
            })
            .collect(),
    )
}

#[test]
fn test_step_counts_iterations() {
    let config = FullBatchConfig::default();
    let count = Session::run(&dataset(), &config, |session| {
        assert_eq!(session.coefficients(), (1.0, 1.0));
        session.step()?;
        session.step()?;
        Ok(session.iterations())
    })
    .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_drop_clears_gradients_when_body_fails() {
    let mut handles = Vec::new();
    let result: Result<(), LinCalError> = Session::run(&dataset(), &FullBatchConfig::default(), |session| {
        session.step()?;
        handles = session.model().parameters();
        assert!(handles.iter().all(|p| p.grad().is_some()));
        Err(LinCalError::InternalError("stop".to_string()))
    });
    assert!(matches!(result, Err(LinCalError::InternalError(_))));
    assert_eq!(handles.len(), 2);
    assert!(handles.iter().all(|p| p.grad().is_none()));
}

#[test]
fn test_empty_dataset_is_rejected() {
    let result = Session::run(&CalibrationDataset::default(), &FullBatchConfig::default(), |_| Ok(()));
    assert!(matches!(result, Err(LinCalError::ConfigurationError(_))));
}

#[test]
fn test_full_batch_reaches_least_squares() {
    let data = dataset();
    let config = FullBatchConfig {
        learning_rate: 0.5,
        iterations: 5000,
        report_every: 1000,
        ..FullBatchConfig::default()
    };
    let fit = run_full_batch(&data, &config).unwrap();
    let (k, b) = least_squares(&data).unwrap();
    assert!((fit.slope - k).abs() < 1e-6, "{} vs {}", fit.slope, k);
    assert!((fit.intercept - b).abs() < 1e-6, "{} vs {}", fit.intercept, b);
    assert_eq!(fit.epoch_losses.len(), 5000);
    let counts: Vec<usize> = fit.reports.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![1000, 2000, 3000, 4000, 5000]);
    assert!(fit.reports.iter().all(|r| r.unit == ProgressUnit::Iteration));
}
