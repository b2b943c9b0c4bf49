//! Account service
//!
//! Read-only lookups of current account and pocket balances.

use std::sync::Arc;

use crate::domain::entities::{Account, AccountId, Pocket, PocketId};
use crate::domain::ports::{AccountStore, PocketStore, TransactionalStore, UnitOfWork};
use crate::error::DomainError;

/// Service for reading accounts and pockets
pub struct AccountService<S>
where
    S: TransactionalStore,
{
    store: Arc<S>,
}

impl<S> AccountService<S>
where
    S: TransactionalStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get an account by ID
    pub async fn get_account(&self, id: &AccountId) -> Result<Account, DomainError> {
        let unit = self.store.begin().await?;
        let found = unit.accounts().find_by_id(id).await;
        unit.rollback().await?;

        found?.ok_or_else(|| DomainError::NotFound(format!("account {}", id)))
    }

    /// Get a pocket by ID
    pub async fn get_pocket(&self, id: &PocketId) -> Result<Pocket, DomainError> {
        let unit = self.store.begin().await?;
        let found = unit.pockets().find_by_id(id).await;
        unit.rollback().await?;

        found?.ok_or_else(|| DomainError::NotFound(format!("pocket {}", id)))
    }
}
