use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_reshape_column() {
    let t = Tensor::from_slice(&[1.0, 2.0, 3.0]);
    let col = reshape_op(&t, vec![3, 1]).unwrap();
    check_tensor_near(&col, &[3, 1], &[1.0, 2.0, 3.0], 1e-12);
}

#[test]
fn test_reshape_wrong_numel() {
    let t = Tensor::from_slice(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        reshape_op(&t, vec![2, 2]),
        Err(LinCalError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_reshape_backward_restores_shape() {
    let t = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![4]);
    let r = reshape_op(&t, vec![2, 2]).unwrap();
    r.backward(Some(Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap()))
        .unwrap();
    check_tensor_near(&t.grad().unwrap(), &[4], &[1.0, 2.0, 3.0, 4.0], 1e-12);
}

#[test]
fn test_reshape_grad_check() {
    let t = create_test_tensor_with_grad(vec![0.2, 0.4, -0.6], vec![3, 1]);
    check_grad(
        |x| reshape_op(&x[0], vec![3]),
        &[t],
        &Tensor::from_slice(&[1.0, -1.0, 2.0]),
        1e-6,
        1e-6,
    )
    .unwrap();
}
