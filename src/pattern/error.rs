// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern must contain at least one byte")]
    Empty,
    #[error("Wildcard mask length {mask} does not match pattern length {bytes}")]
    MaskLengthMismatch { bytes: usize, mask: usize },
    #[error("The binary key cannot have an odd number of digits: {0}")]
    OddDigitCount(String),
    #[error("Hex string contains non-hex symbols: {0}")]
    InvalidHex(String),
}
