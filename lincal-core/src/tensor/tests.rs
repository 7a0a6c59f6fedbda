use super::*;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::ops::reduction::sum_op;

#[test]
fn test_new_rejects_wrong_length() {
    let result = Tensor::new(vec![1.0, 2.0, 3.0], vec![2, 2]);
    assert_eq!(
        result,
        Err(LinCalError::TensorCreationError {
            data_len: 3,
            shape: vec![2, 2]
        })
    );
}

#[test]
fn test_rank_follows_shape() {
    assert_eq!(Tensor::scalar(2.0).rank(), 0);
    assert_eq!(Tensor::from_slice(&[1.0, 2.0]).rank(), 1);
    assert_eq!(Tensor::new(vec![0.0; 6], vec![2, 3]).unwrap().rank(), 2);
}

#[test]
fn test_clone_shares_storage() {
    let t = Tensor::from_slice(&[1.0, 2.0]);
    let alias = t.clone();
    t.fill_(5.0).unwrap();
    assert_eq!(alias.to_vec(), vec![5.0, 5.0]);
    assert_eq!(t.node_id(), alias.node_id());
}

#[test]
fn test_detach_copies() {
    let t = Tensor::from_slice(&[1.0, 2.0]);
    t.requires_grad_(true).unwrap();
    let d = t.detach();
    assert!(!d.requires_grad());
    assert_ne!(t.node_id(), d.node_id());
    assert_eq!(t, d);
}

#[test]
fn test_item_requires_single_element() {
    assert_eq!(Tensor::scalar(2.5).item().unwrap(), 2.5);
    assert!(matches!(
        Tensor::from_slice(&[1.0, 2.0]).item(),
        Err(LinCalError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_backward_requires_grad() {
    let t = Tensor::scalar(1.0);
    assert_eq!(t.backward(None), Err(LinCalError::RequiresGradNotMet));
}

#[test]
fn test_backward_non_scalar_without_gradient() {
    let t = Tensor::from_slice(&[1.0, 2.0]);
    t.requires_grad_(true).unwrap();
    let y = mul_op(&t, &t).unwrap();
    assert_eq!(y.backward(None), Err(LinCalError::BackwardNonScalar));
}

#[test]
fn test_backward_gradient_shape_checked() {
    let t = Tensor::from_slice(&[1.0, 2.0]);
    t.requires_grad_(true).unwrap();
    let y = mul_op(&t, &t).unwrap();
    let result = y.backward(Some(Tensor::from_slice(&[1.0])));
    assert!(matches!(result, Err(LinCalError::ShapeMismatch { .. })));
}

#[test]
fn test_requires_grad_on_non_leaf_fails() {
    let t = Tensor::from_slice(&[1.0]);
    t.requires_grad_(true).unwrap();
    let y = add_op(&t, &t).unwrap();
    assert!(!y.is_leaf());
    assert_eq!(y.requires_grad_(false), Err(LinCalError::RequiresGradOnNonLeaf));
}

#[test]
fn test_gradients_accumulate_until_zeroed() {
    let t = Tensor::from_slice(&[1.0, 2.0]);
    t.requires_grad_(true).unwrap();

    sum_op(&t).unwrap().backward(None).unwrap();
    sum_op(&t).unwrap().backward(None).unwrap();
    assert_eq!(t.grad().unwrap().to_vec(), vec![2.0, 2.0]);

    t.zero_grad();
    assert!(t.grad().is_none());
}

#[test]
fn test_backward_on_leaf_seeds_gradient() {
    let t = Tensor::scalar(3.0);
    t.requires_grad_(true).unwrap();
    t.backward(None).unwrap();
    assert_eq!(t.grad().unwrap().to_vec(), vec![1.0]);
}

#[test]
fn test_shared_subexpression_gradient() {
    // y = (a*b) + (a*b) reuses one node twice
    let a = Tensor::scalar(2.0);
    let b = Tensor::scalar(5.0);
    a.requires_grad_(true).unwrap();
    b.requires_grad_(true).unwrap();
    let ab = mul_op(&a, &b).unwrap();
    let y = add_op(&ab, &ab).unwrap();
    y.backward(None).unwrap();
    assert_eq!(a.grad().unwrap().item().unwrap(), 10.0);
    assert_eq!(b.grad().unwrap().item().unwrap(), 4.0);
    assert!(ab.grad().is_none());
}
