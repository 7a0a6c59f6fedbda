use super::*;

#[test]
fn test_full_and_shape() {
    let t = full(&[2, 3], 0.5).unwrap();
    assert_eq!(t.shape(), vec![2, 3]);
    assert_eq!(t.to_vec(), vec![0.5; 6]);
    assert!(!t.requires_grad());
}

#[test]
fn test_zeros_ones() {
    assert_eq!(zeros(&[3]).unwrap().to_vec(), vec![0.0, 0.0, 0.0]);
    assert_eq!(ones(&[1]).unwrap().to_vec(), vec![1.0]);
}

#[test]
fn test_scalar_shape_is_empty() {
    let t = ones(&[]).unwrap();
    assert_eq!(t.shape(), Vec::<usize>::new());
    assert_eq!(t.numel(), 1);
    assert_eq!(t.item().unwrap(), 1.0);
}

#[test]
fn test_like_variants_follow_shape() {
    let base = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let z = zeros_like(&base).unwrap();
    let o = ones_like(&base).unwrap();
    assert_eq!(z.shape(), vec![2, 2]);
    assert_eq!(o.to_vec(), vec![1.0; 4]);
}

#[test]
fn test_empty_tensor() {
    let t = zeros(&[0]).unwrap();
    assert_eq!(t.numel(), 0);
    assert!(t.to_vec().is_empty());
}
