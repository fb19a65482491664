//! Error types for polynomial-constant

use base_decoder::DecodeError;
use linear_system::SolveError;
use thiserror::Error;

/// Errors that can occur while recovering a constant term
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolynomialError {
    /// A share's digit string could not be decoded
    #[error("Failed to decode share: {0}")]
    Decode(#[from] DecodeError),

    /// The Vandermonde system could not be solved
    #[error("Failed to solve coefficient system: {0}")]
    Solve(#[from] SolveError),

    /// Fewer sample points than unknowns
    #[error("Need {required} sample points, got {supplied}")]
    NotEnoughPoints { required: usize, supplied: usize },

    /// k = 0 leaves no constant term to recover
    #[error("Cannot fit a polynomial through zero points")]
    ZeroPoints,

    /// Two sample points share an x coordinate
    #[error("Duplicate x coordinate {x}")]
    DuplicateAbscissa { x: i64 },
}

/// Result type for polynomial operations
pub type Result<T> = std::result::Result<T, PolynomialError>;
