//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("negative numbers are not supported: {0}")]
    NegativeNumber(i64),

    #[error("unknown traversal order: {0} (expected pre, in, post or level)")]
    UnknownTraversal(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
