//! # Tensor Operations Module (`ops`)
//!
//! Each operation has a forward function named `xxx_op` that computes the result
//! and, when any input requires grad, attaches a `Backward` struct implementing
//! [`BackwardOp`](crate::autograd::BackwardOp) to the output.
//!
//! - [`arithmetic`]: element-wise add, sub, mul (with broadcasting), neg, pow.
//! - [`reduction`]: full sum and mean.
//! - [`linalg`]: rank-2 matmul and transpose.
//! - [`view`]: reshape.

use crate::autograd::BackwardOp;
use crate::error::LinCalError;
use crate::tensor::broadcast_utils::{broadcast_shapes, broadcast_offset, calculate_strides};
use crate::tensor::Tensor;
use std::sync::Arc;

pub mod arithmetic;
pub mod linalg;
pub mod reduction;
pub mod view;

/// Applies `f` element-wise over the broadcast of `a` and `b`.
/// Returns the values and the broadcast shape.
pub(crate) fn broadcast_binary(
    a: &Tensor,
    b: &Tensor,
    f: impl Fn(f64, f64) -> f64,
) -> Result<(Vec<f64>, Vec<usize>), LinCalError> {
    let a_guard = a.read_data();
    let b_guard = b.read_data();
    let output_shape = broadcast_shapes(&a_guard.shape, &b_guard.shape)?;

    let numel: usize = output_shape.iter().product();
    let output_strides = calculate_strides(&output_shape);
    let a_strides = calculate_strides(&a_guard.shape);
    let b_strides = calculate_strides(&b_guard.shape);

    let values = (0..numel)
        .map(|i| {
            let va = a_guard.data[broadcast_offset(i, &output_strides, &a_guard.shape, &a_strides)];
            let vb = b_guard.data[broadcast_offset(i, &output_strides, &b_guard.shape, &b_strides)];
            f(va, vb)
        })
        .collect();
    Ok((values, output_shape))
}

/// Builds the output tensor and links it to `backward` when tracking is needed.
pub(crate) fn finish_op(
    values: Vec<f64>,
    shape: Vec<usize>,
    requires_grad: bool,
    backward: impl FnOnce() -> Arc<dyn BackwardOp>,
) -> Result<Tensor, LinCalError> {
    let output = Tensor::new(values, shape)?;
    if requires_grad {
        output.set_grad_fn(backward());
    }
    Ok(output)
}
