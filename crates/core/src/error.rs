//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable by the caller; nothing here is retried or
/// logged by the domain crates themselves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was rejected (negative price/quantity, overflow while merging).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An aggregate computation has no defined result (e.g. averaging zero carts).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Self::Arithmetic(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Human-readable cause without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::Arithmetic(msg) | Self::InvalidId(msg) => msg,
        }
    }
}
