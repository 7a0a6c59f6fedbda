pub mod reshape;

pub use reshape::reshape_op;
