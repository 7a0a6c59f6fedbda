use thiserror::Error;

/// Custom error type shared by every lincal crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum LinCalError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Operation requires tensor to require grad, but it doesn't.")]
    RequiresGradNotMet,

    #[error("requires_grad can only be changed on leaf tensors.")]
    RequiresGradOnNonLeaf,

    #[error("Backward called on non-scalar tensor without explicit gradient.")]
    BackwardNonScalar,

    #[error("Backward pass error: {0}")]
    BackwardError(String),

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("In-place operation '{operation}' not allowed: {reason}")]
    InplaceModificationError { operation: String, reason: String },

    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),

    #[error("Cannot draw {requested} samples without replacement from {available} rows")]
    SampleSizeTooLarge { requested: usize, available: usize },

    #[error("Failed to load data from '{path}': {reason}")]
    DataLoadError { path: String, reason: String },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}
