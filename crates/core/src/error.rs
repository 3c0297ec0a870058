//! Errors raised before anything reaches the network.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Local failure of a draft or identifier.
///
/// Transport and HTTP failures live in the client crate; nothing here is
/// ever produced by a server answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single field is missing or out of range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A rule spanning several fields or rows does not hold
    /// (e.g. percentages not adding up).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Text that should hold a numeric id does not.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The bare message, without the kind prefix, for display next to a form.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::InvariantViolation(msg) | Self::InvalidId(msg) => msg,
        }
    }
}
