//! Error types for linear-system

use thiserror::Error;

/// Errors that can occur while solving `A x = b`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// No usable pivot in a column after partial pivoting
    #[error("Singular matrix: pivot in column {column} is zero or too small (value: {pivot})")]
    SingularMatrix { column: usize, pivot: f64 },

    /// Coefficient matrix is not square
    #[error("Dimension mismatch: matrix has {rows} rows but row {row} has {len} entries")]
    DimensionMismatch { rows: usize, row: usize, len: usize },

    /// Right-hand side does not match the matrix
    #[error("Right-hand side has {actual} entries, expected {expected}")]
    RhsLength { expected: usize, actual: usize },
}

/// Result type for linear solves
pub type Result<T> = std::result::Result<T, SolveError>;
