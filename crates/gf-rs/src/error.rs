use thiserror::Error;

/// Errors reported by field, polynomial and encoder operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GfError {
    #[error("division by zero in the field")]
    DivisionByZero,

    #[error("discrete log of zero is undefined")]
    LogOfZero,

    #[error("invalid error correction count: {0}")]
    InvalidEcCount(usize),

    #[error("message is empty")]
    EmptyMessage,
}
