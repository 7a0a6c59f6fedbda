use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_mean_all() {
    let t = Tensor::from_slice(&[1.0, 2.0, 3.0, 6.0]);
    assert_relative_eq!(mean_op(&t).unwrap().item().unwrap(), 3.0);
}

#[test]
fn test_mean_empty_fails() {
    let t = Tensor::new(vec![], vec![0]).unwrap();
    assert!(matches!(mean_op(&t), Err(LinCalError::ArithmeticError(_))));
}

#[test]
fn test_mean_backward() {
    let t = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![4]);
    mean_op(&t).unwrap().backward(None).unwrap();
    check_tensor_near(&t.grad().unwrap(), &[4], &[0.25; 4], 1e-12);
}

#[test]
fn test_mean_grad_check() {
    let t = create_test_tensor_with_grad(vec![0.1, 0.9, -0.4, 2.0, 1.0, -3.0], vec![2, 3]);
    check_grad(|x| mean_op(&x[0]), &[t], &Tensor::scalar(1.0), 1e-6, 1e-6).unwrap();
}
