// Full reductions to a rank-0 tensor.
pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
