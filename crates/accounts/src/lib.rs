//! `supplydesk-accounts` — supplier/vendor sign-up validation.
//!
//! This crate is intentionally decoupled from HTTP and storage: it turns a raw
//! submission into a [`RegistrationRequest`] and defines the [`UserStore`]
//! contract that consumes it.

pub mod password;
pub mod registration;
pub mod role;
pub mod store;

pub use password::Password;
pub use registration::{AccountDetails, Profile, RegistrationInput, RegistrationRequest};
pub use role::AccountRole;
pub use store::{NewAccount, UserStore};
