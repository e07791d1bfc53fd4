use std::collections::HashMap;
use std::sync::RwLock;

use supplydesk_core::{DomainError, OrderId, StoreError};
use supplydesk_orders::{OrderRecord, OrderStore, OrderUpdate};

/// In-memory order store.
///
/// Intended for tests/dev. `update` accepts the order, so only pending
/// records can be updated.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, OrderRecord>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a record.
    pub fn insert(&self, record: OrderRecord) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        orders.insert(record.id(), record);
        Ok(())
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, order_id: OrderId) -> Result<OrderRecord, StoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        orders
            .get(&order_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }

    fn update(&self, order_id: OrderId, update: OrderUpdate) -> Result<OrderRecord, StoreError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        let record = orders.get_mut(&order_id).ok_or(DomainError::NotFound)?;
        record.accept(update)?;
        Ok(record.clone())
    }
}
