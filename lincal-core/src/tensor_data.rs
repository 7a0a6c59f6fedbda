// src/tensor_data.rs
use std::fmt::Debug;
use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::tensor::Tensor;

/// Internal storage and metadata for a Tensor.
///
/// Holds the contiguous, row-major `f64` values, the shape, and the
/// autograd bookkeeping. It is wrapped in `Arc<RwLock<TensorData>>` by
/// `Tensor` so clones of a tensor share the same node.
#[derive(Debug)]
pub struct TensorData {
    /// Flattened values in row-major order.
    pub(crate) data: Vec<f64>,
    /// The shape (dimensions) of the tensor. Empty for scalars.
    pub(crate) shape: Vec<usize>,

    // --- Autograd Metadata ---
    /// If true, operations involving this tensor are tracked in the graph.
    pub(crate) requires_grad: bool,
    /// Accumulated gradient, populated on leaves during `backward()`.
    pub(crate) grad: Option<Tensor>,
    /// The operation that produced this tensor. Leaf tensors have `None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp>>,
}

impl TensorData {
    /// Creates a new `TensorData` with the given data and shape.
    ///
    /// # Errors
    /// Returns `LinCalError::TensorCreationError` if the length of `data` does not match
    /// the number of elements described by `shape`.
    pub fn new(data: Vec<f64>, shape: Vec<usize>) -> Result<Self, LinCalError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(LinCalError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(TensorData {
            data,
            shape,
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Number of elements.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// A tensor is a leaf when no operation produced it.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}
