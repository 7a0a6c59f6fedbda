use crate::autograd::graph::{topological_sort, NodeId};
use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::tensor::create::ones;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

impl Tensor {
    /// Checks if this tensor requires gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` status of this tensor **in-place**.
    /// Only allowed on leaf tensors.
    pub fn requires_grad_(&self, requires_grad: bool) -> Result<(), LinCalError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(LinCalError::RequiresGradOnNonLeaf);
        }
        guard.requires_grad = requires_grad;
        Ok(())
    }

    /// Returns true when no operation produced this tensor.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns a clone of the backward node that produced this tensor, if any.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Marks this tensor as the output of `op`.
    pub(crate) fn set_grad_fn(&self, op: Arc<dyn BackwardOp>) {
        let mut guard = self.write_data();
        guard.requires_grad = true;
        guard.grad_fn = Some(op);
    }

    /// Returns a clone of the gradient tensor, if it exists.
    pub fn grad(&self) -> Option<Tensor> {
        self.read_data().grad.clone()
    }

    /// Accumulates `grad_to_add` into this tensor's `grad` field.
    pub fn acc_grad(&self, grad_to_add: Tensor) -> Result<(), LinCalError> {
        let incoming = grad_to_add.to_vec();
        let incoming_shape = grad_to_add.shape();
        let mut guard = self.write_data();
        if incoming_shape != guard.shape {
            return Err(LinCalError::ShapeMismatch {
                expected: guard.shape.clone(),
                actual: incoming_shape,
                operation: "acc_grad".to_string(),
            });
        }
        let summed = match guard.grad.take() {
            Some(existing) => existing
                .to_vec()
                .iter()
                .zip(incoming.iter())
                .map(|(a, b)| a + b)
                .collect(),
            None => incoming,
        };
        guard.grad = Some(Tensor::new(summed, incoming_shape)?);
        Ok(())
    }

    /// Resets the gradient of this tensor to None.
    pub fn zero_grad(&self) {
        self.write_data().grad = None;
    }

    /// Returns a new leaf tensor holding a copy of the values, cut from the graph.
    pub fn detach(&self) -> Tensor {
        let guard = self.read_data();
        Tensor::from_tensor_data(TensorData {
            data: guard.data.clone(),
            shape: guard.shape.clone(),
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Computes the gradients of this tensor w.r.t. the graph leaves.
    ///
    /// # Arguments
    /// * `gradient`: the gradient of the final objective w.r.t. this tensor. When `None`,
    ///   the tensor must hold a single element and the gradient defaults to `1.0`.
    ///
    /// Gradients are accumulated (summed) into the `grad` of every leaf that requires
    /// grad; call `zero_grad` between steps.
    ///
    /// # Errors
    /// * `RequiresGradNotMet` if this tensor does not require grad.
    /// * `BackwardNonScalar` if `gradient` is `None` and the tensor has more than one element.
    /// * `ShapeMismatch` if `gradient` does not match this tensor's shape.
    pub fn backward(&self, gradient: Option<Tensor>) -> Result<(), LinCalError> {
        if !self.requires_grad() {
            return Err(LinCalError::RequiresGradNotMet);
        }

        let shape = self.shape();
        let grad_init = match gradient {
            Some(g) => {
                if g.shape() != shape {
                    return Err(LinCalError::ShapeMismatch {
                        expected: shape,
                        actual: g.shape(),
                        operation: "backward".to_string(),
                    });
                }
                g.detach()
            }
            None => {
                if self.numel() != 1 {
                    return Err(LinCalError::BackwardNonScalar);
                }
                ones(&shape)?
            }
        };

        if self.is_leaf() {
            log::debug!("backward() called on a leaf tensor. Accumulating the seed gradient only.");
            return self.acc_grad(grad_init);
        }

        let sorted_nodes = topological_sort(self)?;
        let mut grad_map: HashMap<NodeId, Tensor> = HashMap::new();
        grad_map.insert(self.node_id(), grad_init);

        for node in sorted_nodes {
            let Some(accumulated_grad) = grad_map.remove(&node.node_id()) else {
                continue;
            };

            let Some(op) = node.grad_fn() else {
                node.acc_grad(accumulated_grad)?;
                continue;
            };

            let input_grads = op.backward(&accumulated_grad)?;
            let inputs = op.inputs();
            if input_grads.len() != inputs.len() {
                return Err(LinCalError::BackwardError(format!(
                    "BackwardOp returned {} gradients, but expected {} (for op: {:?})",
                    input_grads.len(),
                    inputs.len(),
                    op
                )));
            }

            for (input, grad_to_add) in inputs.into_iter().zip(input_grads) {
                if !input.requires_grad() {
                    continue;
                }
                match grad_map.entry(input.node_id()) {
                    Entry::Occupied(mut slot) => {
                        let summed = crate::ops::arithmetic::add_op(slot.get(), &grad_to_add)?;
                        slot.insert(summed);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(grad_to_add);
                    }
                }
            }
        }

        Ok(())
    }
}
