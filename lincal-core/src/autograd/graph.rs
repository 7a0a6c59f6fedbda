use crate::error::LinCalError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Stable identity of a graph node: the address of the shared tensor storage.
pub(crate) type NodeId = *const RwLock<TensorData>;

enum Visit {
    Enter(Tensor),
    Exit(Tensor),
}

/// Orders every node reachable from `root` so that each node comes before all of
/// its inputs. The root is first.
///
/// Iterative depth-first search, so deep graphs do not grow the call stack.
///
/// # Errors
/// `CycleDetected` if an input path leads back to a node still being visited.
pub(crate) fn topological_sort(root: &Tensor) -> Result<Vec<Tensor>, LinCalError> {
    let mut post_order: Vec<Tensor> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![Visit::Enter(root.clone())];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) => {
                let id = node.node_id();
                if on_path.contains(&id) {
                    return Err(LinCalError::CycleDetected);
                }
                if !visited.insert(id) {
                    continue;
                }
                on_path.insert(id);
                let inputs = node.grad_fn().map(|op| op.inputs()).unwrap_or_default();
                stack.push(Visit::Exit(node));
                for input in inputs.into_iter().rev() {
                    stack.push(Visit::Enter(input));
                }
            }
            Visit::Exit(node) => {
                on_path.remove(&node.node_id());
                post_order.push(node);
            }
        }
    }

    post_order.reverse();
    log::trace!("topological_sort: {} nodes reachable from root", post_order.len());
    Ok(post_order)
}
