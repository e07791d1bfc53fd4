use supplydesk_core::{OrderId, StoreError};

use crate::record::{OrderRecord, OrderUpdate};

/// Persistence collaborator for orders.
///
/// `update` applies an acceptance to exactly one existing record and returns
/// the record as stored afterwards. Unknown ids surface as
/// `StoreError::Domain(DomainError::NotFound)`.
pub trait OrderStore: Send + Sync {
    fn get(&self, order_id: OrderId) -> Result<OrderRecord, StoreError>;

    fn update(&self, order_id: OrderId, update: OrderUpdate) -> Result<OrderRecord, StoreError>;
}
