// src/tensor/mod.rs

use crate::autograd::graph::NodeId;
use crate::error::LinCalError;
use crate::tensor_data::TensorData;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd_methods;
pub mod broadcast_utils;
pub mod create;
mod inplace_ops;

pub use create::{full, ones, ones_like, zeros, zeros_like};

/// Represents a multi-dimensional array of `f64` values.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally so that:
/// 1.  **Shared Ownership:** cloning a `Tensor` is cheap and both handles refer to the
///     same node of the computation graph (the optimizer and the model share parameters
///     this way).
/// 2.  **Interior Mutability:** gradients and in-place updates can be written through
///     an immutable `Tensor` reference.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new Tensor from row-major data and a shape.
    pub fn new(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, LinCalError> {
        let tensor_data = TensorData::new(data_vec, shape)?;
        Ok(Tensor::from_tensor_data(tensor_data))
    }

    /// Creates a rank-0 tensor holding a single value.
    pub fn scalar(value: f64) -> Self {
        Tensor::from_tensor_data(TensorData {
            data: vec![value],
            shape: Vec::new(),
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Creates a rank-1 tensor from a slice.
    pub fn from_slice(values: &[f64]) -> Self {
        Tensor::from_tensor_data(TensorData {
            data: values.to_vec(),
            shape: vec![values.len()],
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    pub(crate) fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Acquires a read lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Copies the values out of the tensor.
    pub fn to_vec(&self) -> Vec<f64> {
        self.read_data().data.clone()
    }

    /// Returns the single value of a one-element tensor.
    ///
    /// # Errors
    /// `ShapeMismatch` if the tensor does not hold exactly one element.
    pub fn item(&self) -> Result<f64, LinCalError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(LinCalError::ShapeMismatch {
                expected: vec![1],
                actual: guard.shape.clone(),
                operation: "item".to_string(),
            });
        }
        Ok(guard.data[0])
    }

    /// Sums a broadcast gradient back down to `target_shape`.
    /// The result is a fresh leaf that does not require grad.
    pub(crate) fn reduce_to_shape(&self, target_shape: &[usize]) -> Result<Tensor, LinCalError> {
        let guard = self.read_data();
        let reduced = broadcast_utils::reduce_data_to_shape(&guard.data, &guard.shape, target_shape)?;
        Tensor::new(reduced, target_shape.to_vec())
    }

    /// Identity of the graph node behind this handle.
    pub(crate) fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }
}

// Cloning shares the node, it does not copy the data.
impl Clone for Tensor {
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Tensor")
            .field("shape", &guard.shape)
            .field("data", &guard.data)
            .field("requires_grad", &guard.requires_grad)
            .field("is_leaf", &guard.is_leaf())
            .finish()
    }
}

/// Two tensors are equal when shapes and values are equal.
/// Autograd metadata is ignored.
impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        let a = self.read_data();
        let b = other.read_data();
        a.shape == b.shape && a.data == b.data
    }
}

#[cfg(test)]
mod tests;
