//! Account domain entity
//!
//! An account is the primary holder of funds. Its status gates every transfer
//! that touches it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decimal places a stored balance can hold (`NUMERIC(19, 4)`)
pub const BALANCE_SCALE: u32 = 4;

/// Whether `value` can be stored as a balance without rounding
pub fn fits_balance_scale(value: Decimal) -> bool {
    value.normalize().scale() <= BALANCE_SCALE
}

/// Unique identifier for an account
///
/// Ordered so that rows can always be locked lowest id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an account may send or receive funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Blocked => write!(f, "blocked"),
        }
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "blocked" => Ok(AccountStatus::Blocked),
            _ => Err(format!("Unknown account status: {}", s)),
        }
    }
}

/// A funds-holding account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: AccountId,
    pub status: AccountStatus,
    pub balance: Decimal,
}

impl Account {
    /// Only active accounts take part in transfers
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}
