use lincal_core::Tensor;

// Points on y = slope * x + intercept, no noise.
#[allow(dead_code)]
pub fn exact_line(slope: f64, intercept: f64, xs: &[f64]) -> (Tensor, Tensor) {
    let ys: Vec<f64> = xs.iter().map(|x| slope * x + intercept).collect();
    (Tensor::from_slice(xs), Tensor::from_slice(&ys))
}

// Ignore "already initialized" when several tests in a binary call this.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
