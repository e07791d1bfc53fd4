//! Request workflows: validate a submission, then hand it to the store.
//!
//! ```text
//! FormData
//!   ↓
//! 1. Validate (pure, accumulates every field error)
//!   ↓
//! 2. Map the validated request onto the store's input
//!   ↓
//! 3. Store call (uniqueness / existence / status enforced there)
//! ```
//!
//! Store-reported field errors come back as [`FieldErrors`] in the same shape
//! as validation errors, so a caller renders both the same way.

use thiserror::Error;

use supplydesk_accounts::{RegistrationInput, UserStore};
use supplydesk_core::{DomainError, FieldErrors, FormData, OrderId, StoreError, UserId};
use supplydesk_orders::{OrderAcceptanceInput, OrderRecord, OrderStore};

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Submission (or store) rejected one or more fields; nothing was created.
    #[error("invalid registration: {0}")]
    Invalid(FieldErrors),
    #[error("user store failure: {0}")]
    Store(StoreError),
}

#[derive(Debug, Error)]
pub enum AcceptanceError {
    #[error("order not found")]
    NotFound,
    /// Submission rejected; the order was not touched.
    #[error("invalid acceptance: {0}")]
    Invalid(FieldErrors),
    #[error("order store failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AcceptanceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Domain(DomainError::NotFound) => AcceptanceError::NotFound,
            StoreError::Field(errors) => AcceptanceError::Invalid(errors),
            other => AcceptanceError::Store(other),
        }
    }
}

impl From<StoreError> for RegistrationError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Field(errors) => RegistrationError::Invalid(errors),
            other => RegistrationError::Store(other),
        }
    }
}

/// Sign-up workflow over a [`UserStore`].
#[derive(Debug)]
pub struct RegistrationService<S> {
    store: S,
}

impl<S> RegistrationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: UserStore> RegistrationService<S> {
    #[tracing::instrument(skip_all)]
    pub fn register(&self, data: &FormData) -> Result<UserId, RegistrationError> {
        let request = RegistrationInput::validate(data).map_err(|errors| {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "registration rejected");
            RegistrationError::Invalid(errors)
        })?;

        let username = request.username().to_string();
        let role = request.role();

        match self.store.create(request.into_new_account()) {
            Ok(user_id) => {
                tracing::info!(%user_id, %username, %role, "account registered");
                Ok(user_id)
            }
            Err(err) => {
                tracing::warn!(%username, error = %err, "user store refused registration");
                Err(err.into())
            }
        }
    }
}

/// Order acceptance workflow over an [`OrderStore`].
#[derive(Debug)]
pub struct OrderAcceptanceService<S> {
    store: S,
}

impl<S> OrderAcceptanceService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: OrderStore> OrderAcceptanceService<S> {
    /// Accept `order_id` with the submitted delivery commitment.
    ///
    /// The order must exist before the submission is even validated.
    #[tracing::instrument(skip_all, fields(%order_id))]
    pub fn accept(&self, order_id: OrderId, data: &FormData) -> Result<OrderRecord, AcceptanceError> {
        self.store.get(order_id)?;

        let request = OrderAcceptanceInput::validate(data).map_err(|errors| {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "acceptance rejected");
            AcceptanceError::Invalid(errors)
        })?;

        let record = self.store.update(order_id, request.into_update()).map_err(|err| {
            tracing::warn!(error = %err, "order store refused acceptance");
            AcceptanceError::from(err)
        })?;

        tracing::info!(
            status = ?record.status(),
            expected_delivery_date = ?record.expected_delivery_date(),
            "order accepted"
        );
        Ok(record)
    }
}
