//! Order acceptance module.
//!
//! This crate contains the acceptance form and the order-store contract,
//! implemented purely as deterministic logic (no IO, no HTTP, no storage).

pub mod acceptance;
pub mod record;
pub mod store;

pub use acceptance::{OrderAcceptanceInput, OrderAcceptanceRequest, parse_date};
pub use record::{OrderRecord, OrderStatus, OrderUpdate};
pub use store::OrderStore;
