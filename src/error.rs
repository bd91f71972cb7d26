// shortcuts-vdf/src/error.rs

use thiserror::Error;

/// Structural problems found while decoding a binary VDF buffer.
///
/// `offset` is the position in the input where the offending item starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("Truncated int32 at offset {offset}: need 4 bytes, {available} available")]
    Truncated { offset: usize, available: usize },

    #[error("Unknown type tag {tag:#04x} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    #[error("Object nesting exceeds {limit} levels at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },
}

/// Custom error type for the shortcuts codec.
#[derive(Error, Debug)]
pub enum VdfError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid binary VDF: {0}")]
    Format(#[from] FormatError),
}

/// Result type alias for codec and store operations.
pub type Result<T> = std::result::Result<T, VdfError>;
