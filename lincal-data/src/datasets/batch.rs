use lincal_core::{LinCalError, Tensor};

/// Rows picked out of a dataset for one update step.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub indices: Vec<usize>,
    pub concentrations: Vec<f64>,
    pub absorbances: Vec<f64>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Concentrations and absorbances as rank-1 tensors `[n]`, ready for a forward pass.
    pub fn to_tensors(&self) -> Result<(Tensor, Tensor), LinCalError> {
        let n = self.len();
        Ok((
            Tensor::new(self.concentrations.clone(), vec![n])?,
            Tensor::new(self.absorbances.clone(), vec![n])?,
        ))
    }
}
