use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_reduction_from_str() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert!("none".parse::<Reduction>().is_err());
}

#[test]
fn test_mse_loss_forward_basic() -> Result<(), LinCalError> {
    let mse = MSELoss::default();
    let input = Tensor::from_slice(&[1.0, 2.0]);
    let target = Tensor::from_slice(&[1.5, 1.0]);
    let loss = mse.calculate(&input, &target)?;
    assert_eq!(loss.shape(), Vec::<usize>::new());
    assert!(!loss.requires_grad(), "Loss should not require grad if inputs dont");
    assert_relative_eq!(loss.item()?, 0.625, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_sum() -> Result<(), LinCalError> {
    let mse = MSELoss::new(Reduction::Sum);
    let loss = mse.calculate(&Tensor::from_slice(&[1.0, 2.0]), &Tensor::from_slice(&[1.5, 1.0]))?;
    assert_relative_eq!(loss.item()?, 1.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_forward_mismatched_shapes() {
    let mse = MSELoss::default();
    let input = Tensor::from_slice(&[1.0, 2.0]);
    let target = Tensor::from_slice(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        mse.calculate(&input, &target),
        Err(LinCalError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_mse_loss_perfect_fit_is_zero() -> Result<(), LinCalError> {
    let t = Tensor::from_slice(&[0.3, 0.4]);
    let loss = MSELoss::default().calculate(&t, &t.detach())?;
    assert_eq!(loss.item()?, 0.0);
    Ok(())
}

#[test]
fn test_mse_loss_backward() -> Result<(), LinCalError> {
    let input = create_test_tensor_with_grad(vec![1.0, 2.0], vec![2]);
    let target = Tensor::from_slice(&[1.5, 1.0]);
    let loss = MSELoss::default().calculate(&input, &target)?;
    assert!(loss.grad_fn().is_some(), "Loss should have grad_fn");
    loss.backward(None)?;
    // d/dx mean((x - t)^2) = 2 (x - t) / n
    check_tensor_near(&input.grad().unwrap(), &[2], &[-0.5, 1.0], 1e-12);
    Ok(())
}

#[test]
fn test_mse_loss_grad_check() {
    let input = create_test_tensor_with_grad(vec![0.2, 0.5, 0.9], vec![3]);
    let target = Tensor::from_slice(&[0.3, 0.45, 1.1]);
    let mse = MSELoss::default();
    check_grad(
        |t| mse.calculate(&t[0], &target),
        &[input],
        &Tensor::scalar(1.0),
        1e-6,
        1e-6,
    )
    .unwrap();
}
