//! `supplydesk-core` — shared building blocks for input validation.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod form;
pub mod id;

pub use error::{DomainError, StoreError};
pub use form::{ErrorKind, FieldError, FieldErrors, FieldSpec, FormData, Widget};
pub use id::{OrderId, UserId};
