// src/tensor/inplace_ops.rs
//
// In-place updates used by optimizers and initializers. They write straight into
// the storage and are not recorded in the graph, so they are refused on tensors
// produced by an operation.

use crate::error::LinCalError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::sync::RwLockWriteGuard;

impl Tensor {
    fn write_leaf(&self, operation: &str) -> Result<RwLockWriteGuard<'_, TensorData>, LinCalError> {
        let guard = self.write_data();
        if !guard.is_leaf() {
            return Err(LinCalError::InplaceModificationError {
                operation: operation.to_string(),
                reason: "tensor is the output of a tracked operation".to_string(),
            });
        }
        Ok(guard)
    }

    fn zip_inplace(
        &self,
        other: &Tensor,
        operation: &str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<(), LinCalError> {
        let other_data = other.to_vec();
        let other_shape = other.shape();
        let mut guard = self.write_leaf(operation)?;
        if guard.shape != other_shape {
            return Err(LinCalError::ShapeMismatch {
                expected: guard.shape.clone(),
                actual: other_shape,
                operation: operation.to_string(),
            });
        }
        for (value, o) in guard.data.iter_mut().zip(other_data) {
            *value = f(*value, o);
        }
        Ok(())
    }

    /// `self += other`, shapes must match.
    pub fn add_(&self, other: &Tensor) -> Result<(), LinCalError> {
        self.zip_inplace(other, "add_", |a, b| a + b)
    }

    /// `self -= other`, shapes must match.
    pub fn sub_(&self, other: &Tensor) -> Result<(), LinCalError> {
        self.zip_inplace(other, "sub_", |a, b| a - b)
    }

    /// `self *= scalar`.
    pub fn mul_scalar_(&self, scalar: f64) -> Result<(), LinCalError> {
        let mut guard = self.write_leaf("mul_scalar_")?;
        guard.data.iter_mut().for_each(|v| *v *= scalar);
        Ok(())
    }

    /// Sets every element to `value`.
    pub fn fill_(&self, value: f64) -> Result<(), LinCalError> {
        let mut guard = self.write_leaf("fill_")?;
        guard.data.fill(value);
        Ok(())
    }
}
