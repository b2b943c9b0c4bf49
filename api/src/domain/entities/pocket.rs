//! Pocket domain entity
//!
//! A pocket is a sub-balance nested under exactly one account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountId;

/// Unique identifier for a pocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PocketId(pub Uuid);

impl PocketId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PocketId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PocketId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PocketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pocket owned by a single account for its whole lifetime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pocket {
    pub id: PocketId,
    pub account_id: AccountId,
    pub balance: Decimal,
}

impl Pocket {
    pub fn belongs_to(&self, account_id: &AccountId) -> bool {
        self.account_id == *account_id
    }
}
