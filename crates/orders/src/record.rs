use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use supplydesk_core::{DomainError, OrderId};

/// Order status lifecycle as seen by the order store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
    Delivered,
}

/// The subset of an order record that an acceptance changes.
///
/// Built by [`crate::OrderAcceptanceRequest::into_update`]; the store decides
/// how it lands on the persistent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub expected_delivery_date: NaiveDate,
    pub delivery_notes: Option<String>,
}

/// Persistent order record owned by the order store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    id: OrderId,
    status: OrderStatus,
    expected_delivery_date: Option<NaiveDate>,
    delivery_notes: Option<String>,
}

impl OrderRecord {
    /// A freshly placed order awaiting acceptance.
    pub fn pending(id: OrderId) -> Self {
        Self {
            id,
            status: OrderStatus::Pending,
            expected_delivery_date: None,
            delivery_notes: None,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn expected_delivery_date(&self) -> Option<NaiveDate> {
        self.expected_delivery_date
    }

    pub fn delivery_notes(&self) -> Option<&str> {
        self.delivery_notes.as_deref()
    }

    /// Record the delivery commitment and move the order to `Accepted`.
    ///
    /// Only pending orders can be accepted.
    pub fn accept(&mut self, update: OrderUpdate) -> Result<(), DomainError> {
        if self.status != OrderStatus::Pending {
            return Err(DomainError::invariant(
                "only pending orders can be accepted",
            ));
        }

        self.expected_delivery_date = Some(update.expected_delivery_date);
        self.delivery_notes = update.delivery_notes;
        self.status = OrderStatus::Accepted;
        Ok(())
    }
}
