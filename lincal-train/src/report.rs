use std::fmt;

/// What one reported step counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUnit {
    Epoch,
    Iteration,
}

impl fmt::Display for ProgressUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressUnit::Epoch => write!(f, "epoch"),
            ProgressUnit::Iteration => write!(f, "iteration"),
        }
    }
}

/// Snapshot of the fit after `count` epochs (or iterations).
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub unit: ProgressUnit,
    /// Number of completed epochs or iterations, starting at 1.
    pub count: usize,
    pub slope: f64,
    pub intercept: f64,
    /// Loss of the last batch, computed before its update.
    pub loss: f64,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, k = {:.6}, b = {:.6}, loss = {:.6}",
            self.unit, self.count, self.slope, self.intercept, self.loss
        )
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedParameters {
    pub slope: f64,
    pub intercept: f64,
    /// Loss of the last update.
    pub final_loss: f64,
    /// Mean batch loss of each epoch (one entry per iteration for full-batch runs).
    pub epoch_losses: Vec<f64>,
    pub reports: Vec<StepReport>,
}

impl TrainedParameters {
    pub fn coefficients(&self) -> (f64, f64) {
        (self.slope, self.intercept)
    }

    /// Absorbance predicted for `concentration` by the fitted line.
    pub fn predict(&self, concentration: f64) -> f64 {
        self.slope * concentration + self.intercept
    }

    /// Concentration that would produce `absorbance`, the usual read-back of a calibration curve.
    ///
    /// `None` when the fitted slope is zero.
    pub fn concentration_for(&self, absorbance: f64) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        Some((absorbance - self.intercept) / self.slope)
    }
}

// 0-based step index. The first step is never reported, even with `every == 1`.
pub(crate) fn should_report(step: usize, every: usize) -> bool {
    step > 0 && (step + 1) % every == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        let report = StepReport {
            unit: ProgressUnit::Epoch,
            count: 200,
            slope: 0.482823,
            intercept: 0.2684531,
            loss: 0.0035,
        };
        assert_eq!(
            report.to_string(),
            "epoch 200, k = 0.482823, b = 0.268453, loss = 0.003500"
        );

        let legacy = StepReport {
            unit: ProgressUnit::Iteration,
            ..report
        };
        assert!(legacy.to_string().starts_with("iteration 200, "));
    }

    #[test]
    fn test_should_report() {
        let reported: Vec<usize> = (0..1000).filter(|&e| should_report(e, 200)).collect();
        assert_eq!(reported, vec![199, 399, 599, 799, 999]);
        assert!(!should_report(0, 1));
        assert!(should_report(1, 1));
    }

    #[test]
    fn test_prediction_and_inverse() {
        let fit = TrainedParameters {
            slope: 0.6,
            intercept: 0.2,
            final_loss: 0.0,
            epoch_losses: vec![],
            reports: vec![],
        };
        assert!((fit.predict(0.5) - 0.5).abs() < 1e-12);
        assert!((fit.concentration_for(0.5).unwrap() - 0.5).abs() < 1e-12);

        let flat = TrainedParameters { slope: 0.0, ..fit };
        assert_eq!(flat.concentration_for(0.5), None);
    }
}
