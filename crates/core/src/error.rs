//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (coercion of malformed input).
/// I/O concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input could not be coerced into the requested type.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

impl DomainError {
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion(_))
    }
}
