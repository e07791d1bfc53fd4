use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use supplydesk_accounts::{NewAccount, UserStore};
use supplydesk_core::{FieldError, FieldErrors, StoreError, UserId};

/// In-memory user store.
///
/// Intended for tests/dev. Usernames are unique case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    accounts: RwLock<HashMap<UserId, NewAccount>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, id: UserId) -> Result<Option<NewAccount>, StoreError> {
        Ok(self.read()?.get(&id).cloned())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<UserId, NewAccount>>, StoreError> {
        self.accounts
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))
    }
}

impl UserStore for InMemoryUserStore {
    fn create(&self, account: NewAccount) -> Result<UserId, StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let wanted = account.username.to_lowercase();
        if accounts
            .values()
            .any(|existing| existing.username.to_lowercase() == wanted)
        {
            return Err(FieldErrors::single(
                "username",
                FieldError::rejected("A user with that username already exists."),
            )
            .into());
        }

        let id = UserId::new();
        accounts.insert(id, account);
        Ok(id)
    }
}
