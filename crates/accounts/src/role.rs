use core::str::FromStr;

use serde::{Deserialize, Serialize};

use supplydesk_core::FieldError;

/// Marketplace role chosen at registration.
///
/// The set is closed: an account is either a supplier or a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Supplier,
    Vendor,
}

impl AccountRole {
    /// Permitted choices in display order.
    pub const ALL: [AccountRole; 2] = [AccountRole::Supplier, AccountRole::Vendor];

    /// Submitted choice key.
    pub fn as_str(self) -> &'static str {
        match self {
            AccountRole::Supplier => "supplier",
            AccountRole::Vendor => "vendor",
        }
    }

    /// Human-readable label for select widgets.
    pub fn label(self) -> &'static str {
        match self {
            AccountRole::Supplier => "Supplier",
            AccountRole::Vendor => "Vendor",
        }
    }
}

impl core::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = FieldError;

    /// Exact, case-sensitive match on the choice key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| FieldError::invalid_choice(s))
    }
}
