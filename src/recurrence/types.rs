//! Evaluation error definitions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("G(n) is only defined for n >= 1, got n = {n}")]
    InvalidArgument { n: i64 },

    #[error("G({n}) does not fit in a 64-bit unsigned integer")]
    Overflow { n: i64 },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Known value mismatch: G({n}) should be {expected}, evaluated to {actual}")]
    Mismatch { n: i64, expected: u64, actual: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
