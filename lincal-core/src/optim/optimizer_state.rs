/// Moment estimates Adam keeps for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct AdamParamState {
    /// First moment (exponential moving average of gradients).
    pub m: Vec<f64>,
    /// Second moment (exponential moving average of squared gradients).
    pub v: Vec<f64>,
}

/// In-memory snapshot of an optimizer.
///
/// Per-parameter entries are indexed by the parameter's position in the list the
/// optimizer was built with. `None` means the parameter has not been updated yet.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizerState {
    /// State specific to the SGD optimizer.
    Sgd {
        lr: f64,
        momentum: f64,
        momentum_buffers: Vec<Option<Vec<f64>>>,
    },
    /// State specific to the Adam optimizer.
    Adam {
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
        iterations: u64,
        param_states: Vec<Option<AdamParamState>>,
    },
}

impl OptimizerState {
    pub fn kind(&self) -> &'static str {
        match self {
            OptimizerState::Sgd { .. } => "sgd",
            OptimizerState::Adam { .. } => "adam",
        }
    }
}
