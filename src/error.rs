//! Error types for iocfang.
//!
//! The rewriting core is total and never fails; these errors come from the
//! budgeted entry point and the outer surfaces (CLI, Python bindings).

use thiserror::Error;

/// Main error type for iocfang operations.
#[derive(Debug, Error)]
pub enum FangError {
    /// Missing or unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource limit exceeded
    #[error("Resource limit exceeded: {resource} ({used}/{limit})")]
    ResourceExhausted {
        resource: String,
        used: usize,
        limit: usize,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FangError {
    fn from(err: serde_json::Error) -> Self {
        FangError::Serialization(err.to_string())
    }
}

/// Result type alias for iocfang operations
pub type Result<T> = std::result::Result<T, FangError>;

/// Convert iocfang errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<FangError> for pyo3::PyErr {
    fn from(err: FangError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            FangError::Io(e) => PyIOError::new_err(e.to_string()),
            FangError::InvalidInput(msg) => PyValueError::new_err(msg),
            _ => PyException::new_err(err.to_string()),
        }
    }
}
