use thiserror::Error;

/// Error type for the scalargrad engine and the layers built on it.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// `pow` only differentiates with respect to a fixed real exponent.
    #[error("Invalid exponent {exponent}: power requires a finite real constant")]
    InvalidExponent { exponent: f64 },

    #[error("Dimension mismatch during {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised by a checked backward sweep when nodes still hold gradient from
    /// a previous sweep.
    #[error("{count} node(s) carry a non-zero gradient before the backward sweep; reset gradients first")]
    StaleGradient { count: usize },

    #[error("Non-finite gradient {grad} on parameter {index}")]
    NonFiniteGradient { index: usize, grad: f64 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
