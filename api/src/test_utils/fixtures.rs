//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use rust_decimal::Decimal;

use crate::domain::entities::{Account, AccountId, AccountStatus, Pocket, PocketId};

/// Create an active test account holding 1000
pub fn test_account() -> Account {
    test_account_with_balance(Decimal::from(1000))
}

/// Create an active test account with a specific balance
pub fn test_account_with_balance(balance: Decimal) -> Account {
    Account {
        id: AccountId::new(),
        status: AccountStatus::Active,
        balance,
    }
}

/// Create a blocked test account holding 1000
pub fn blocked_account() -> Account {
    Account {
        status: AccountStatus::Blocked,
        ..test_account()
    }
}

/// Create an empty pocket owned by the given account
pub fn test_pocket_for(account: &Account) -> Pocket {
    Pocket {
        id: PocketId::new(),
        account_id: account.id,
        balance: Decimal::ZERO,
    }
}
