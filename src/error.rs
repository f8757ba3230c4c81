//! Error types for suffix array construction, search and highlighting

use thiserror::Error;

/// Result type alias for suffix array operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an input string is rejected before any index is built
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,

    #[error("invalid character {byte:#04x} at offset {offset}: only A-Z and a-z are allowed")]
    InvalidCharacter { offset: usize, byte: u8 },
}

/// Suffix array error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("out of memory while building suffix array")]
    OutOfMemory,

    /// A bucket was drained past its end. Indicates broken pass bookkeeping.
    #[error("dequeue from an empty bucket queue")]
    EmptyQueue,

    #[error(
        "invalid highlight range: start {start}, length {length} (text length is {text_len})"
    )]
    InvalidRange {
        start: usize,
        length: usize,
        text_len: usize,
    },
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::OutOfMemory
    }
}
