//! Infrastructure layer: store adapters and request workflows.

pub mod services;
pub mod store;

pub use services::{AcceptanceError, OrderAcceptanceService, RegistrationError, RegistrationService};
pub use store::{InMemoryOrderStore, InMemoryUserStore};
