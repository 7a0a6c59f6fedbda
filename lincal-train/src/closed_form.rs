use lincal_core::LinCalError;
use lincal_data::{CalibrationDataset, Dataset};

/// Ordinary least-squares slope and intercept of absorbance on concentration.
///
/// # Errors
/// `ArithmeticError` with fewer than two rows, or when every concentration is equal.
pub fn least_squares(dataset: &CalibrationDataset) -> Result<(f64, f64), LinCalError> {
    let n = dataset.len();
    if n < 2 {
        return Err(LinCalError::ArithmeticError(format!(
            "least squares needs at least 2 rows, got {}",
            n
        )));
    }
    let rows = dataset.rows();
    let mean_c = rows.iter().map(|r| r.concentration).sum::<f64>() / n as f64;
    let mean_a = rows.iter().map(|r| r.absorbance).sum::<f64>() / n as f64;

    let (sxy, sxx) = rows.iter().fold((0.0, 0.0), |(sxy, sxx), r| {
        let dc = r.concentration - mean_c;
        (sxy + dc * (r.absorbance - mean_a), sxx + dc * dc)
    });
    if sxx == 0.0 {
        return Err(LinCalError::ArithmeticError(
            "concentrations have zero variance".to_string(),
        ));
    }
    let slope = sxy / sxx;
    Ok((slope, mean_a - slope * mean_c))
}
