//! Domain error model.

use thiserror::Error;

use crate::form::FieldErrors;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (invariants,
/// lookups). Per-field input problems are reported as
/// [`FieldErrors`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Failure reported by a persistence collaborator (user store, order store).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected one or more submitted fields (e.g. a taken username).
    #[error("store rejected fields: {0}")]
    Field(FieldErrors),

    /// Deterministic domain failure raised by the store.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing storage itself failed.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<FieldErrors> for StoreError {
    fn from(value: FieldErrors) -> Self {
        Self::Field(value)
    }
}
