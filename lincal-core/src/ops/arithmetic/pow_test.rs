use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_pow_square() {
    let t = Tensor::from_slice(&[-2.0, 0.5, 3.0]);
    check_tensor_near(&pow_scalar_op(&t, 2.0).unwrap(), &[3], &[4.0, 0.25, 9.0], 1e-12);
}

#[test]
fn test_pow_non_finite_exponent() {
    let t = Tensor::from_slice(&[1.0]);
    assert!(matches!(
        pow_scalar_op(&t, f64::NAN),
        Err(LinCalError::ArithmeticError(_))
    ));
}

#[test]
fn test_pow_square_backward() {
    let t = create_test_tensor_with_grad(vec![-2.0, 0.5], vec![2]);
    let y = pow_scalar_op(&t, 2.0).unwrap();
    y.backward(Some(Tensor::from_slice(&[1.0, 1.0]))).unwrap();
    check_tensor_near(&t.grad().unwrap(), &[2], &[-4.0, 1.0], 1e-12);
}

#[test]
fn test_pow_grad_check() {
    let t = create_test_tensor_with_grad(vec![0.7, 1.3, 2.1], vec![3]);
    let output_grad = Tensor::from_slice(&[1.0, -0.5, 0.25]);
    check_grad(|x| pow_scalar_op(&x[0], 3.0), &[t], &output_grad, 1e-6, 1e-5).unwrap();
}
