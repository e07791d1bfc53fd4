use supplydesk_core::{StoreError, UserId};

use crate::password::Password;
use crate::registration::Profile;

/// Input to account creation, produced from a validated registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: Password,
    pub profile: Profile,
}

/// Persistence collaborator for user accounts.
///
/// Implementations own uniqueness (e.g. username) and report violations as
/// [`StoreError::Field`] so they reach the caller in the same shape as
/// validation errors.
pub trait UserStore: Send + Sync {
    fn create(&self, account: NewAccount) -> Result<UserId, StoreError>;
}
