use crate::nn::Module;

/// A fitted straight line over a single input feature.
pub trait LineModel: Module {
    /// Current slope `k`.
    fn slope(&self) -> f64;

    /// Current intercept `b`.
    fn intercept(&self) -> f64;

    fn coefficients(&self) -> (f64, f64) {
        (self.slope(), self.intercept())
    }

    /// Evaluates the line at each input without touching the graph.
    fn predict(&self, inputs: &[f64]) -> Vec<f64> {
        let (k, b) = self.coefficients();
        inputs.iter().map(|x| k * x + b).collect()
    }
}
