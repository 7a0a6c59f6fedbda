// src/tensor/broadcast_utils.rs

use crate::error::LinCalError;

/// Calculates contiguous (row-major) strides for a shape.
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// Computes the broadcast shape of two shapes (numpy rules, aligned on the right).
///
/// # Errors
/// `BroadcastError` when a pair of dimensions differs and neither is 1.
pub fn broadcast_shapes(shape1: &[usize], shape2: &[usize]) -> Result<Vec<usize>, LinCalError> {
    let rank = shape1.len().max(shape2.len());
    let pad1 = rank - shape1.len();
    let pad2 = rank - shape2.len();
    let mut output = Vec::with_capacity(rank);
    for i in 0..rank {
        let d1 = if i < pad1 { 1 } else { shape1[i - pad1] };
        let d2 = if i < pad2 { 1 } else { shape2[i - pad2] };
        let dim = if d1 == d2 {
            d1
        } else if d1 == 1 {
            d2
        } else if d2 == 1 {
            d1
        } else {
            return Err(LinCalError::BroadcastError {
                shape1: shape1.to_vec(),
                shape2: shape2.to_vec(),
            });
        };
        output.push(dim);
    }
    Ok(output)
}

/// Maps a flat index of `target_shape` to the flat offset of the element it reads
/// in `source_shape`, where `source_shape` broadcasts to `target_shape`.
pub(crate) fn broadcast_offset(
    index: usize,
    target_strides: &[usize],
    source_shape: &[usize],
    source_strides: &[usize],
) -> usize {
    let rank_diff = target_strides.len() - source_shape.len();
    let mut remaining = index;
    let mut offset = 0;
    for (dim, &stride) in target_strides.iter().enumerate() {
        let coord = remaining / stride;
        remaining %= stride;
        if dim >= rank_diff {
            let source_dim = dim - rank_diff;
            if source_shape[source_dim] != 1 {
                offset += coord * source_strides[source_dim];
            }
        }
    }
    offset
}

/// Expands `data` of `source_shape` to `target_shape`.
pub(crate) fn expand_data(data: &[f64], source_shape: &[usize], target_shape: &[usize]) -> Vec<f64> {
    if source_shape == target_shape {
        return data.to_vec();
    }
    let numel: usize = target_shape.iter().product();
    let target_strides = calculate_strides(target_shape);
    let source_strides = calculate_strides(source_shape);
    (0..numel)
        .map(|i| data[broadcast_offset(i, &target_strides, source_shape, &source_strides)])
        .collect()
}

/// Sums `data` of `grad_shape` down to `target_shape`, undoing a broadcast.
///
/// # Errors
/// `ShapeMismatch` if `target_shape` does not broadcast to `grad_shape`.
pub(crate) fn reduce_data_to_shape(
    data: &[f64],
    grad_shape: &[usize],
    target_shape: &[usize],
) -> Result<Vec<f64>, LinCalError> {
    if grad_shape == target_shape {
        return Ok(data.to_vec());
    }
    let broadcast_ok = broadcast_shapes(grad_shape, target_shape)
        .map(|shape| shape == grad_shape)
        .unwrap_or(false);
    if !broadcast_ok {
        return Err(LinCalError::ShapeMismatch {
            expected: target_shape.to_vec(),
            actual: grad_shape.to_vec(),
            operation: "reduce_to_shape".to_string(),
        });
    }
    let target_numel: usize = target_shape.iter().product();
    let mut reduced = vec![0.0; target_numel];
    let grad_strides = calculate_strides(grad_shape);
    let target_strides = calculate_strides(target_shape);
    for (i, value) in data.iter().enumerate() {
        reduced[broadcast_offset(i, &grad_strides, target_shape, &target_strides)] += value;
    }
    Ok(reduced)
}
