//! Error types for single-qubit state operations

use num_complex::Complex64;
use thiserror::Error;

/// Errors that can occur when constructing a qubit state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Column vector does not have exactly two entries
    #[error("expected a 2-element column vector to build a qubit, got {} entries: {entries:?}", .entries.len())]
    ShapeError { entries: Vec<Complex64> },
}

/// Result type for single-qubit state operations
pub type Result<T> = std::result::Result<T, StateError>;
