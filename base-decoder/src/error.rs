//! Error types for base-decoder

use thiserror::Error;

/// Errors that can occur while decoding a digit string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Character is not an ASCII letter or digit
    #[error("Invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },

    /// Digit is valid but not representable in the base
    #[error("Digit {character:?} (value {value}) at position {position} is out of range for base {base}")]
    DigitOutOfRange {
        character: char,
        value: u32,
        base: u32,
        position: usize,
    },

    /// Base outside 2..=36
    #[error("Unsupported base {base}: expected a base between 2 and 36")]
    InvalidBase { base: u32 },

    /// Nothing to decode
    #[error("Cannot decode an empty digit string")]
    Empty,

    /// Value does not fit in an i64
    #[error("Value {digits:?} in base {base} does not fit in a 64-bit signed integer")]
    Overflow { digits: String, base: u32 },
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;
