//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Stores are only reachable through a [`UnitOfWork`], so every read and write
//! of one operation shares a single storage transaction.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountId, Pocket, PocketId};
use crate::error::DomainError;

/// Store for Account entities
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by ID without locking it
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Find an account by ID and hold a write lock on it until the unit of
    /// work ends
    async fn find_by_id_for_update(
        &self,
        id: &AccountId,
    ) -> Result<Option<Account>, DomainError>;

    /// Write back the account's current state
    async fn save(&self, account: &Account) -> Result<(), DomainError>;
}

/// Store for Pocket entities
#[async_trait]
pub trait PocketStore: Send + Sync {
    /// Find a pocket by ID without locking it
    async fn find_by_id(&self, id: &PocketId) -> Result<Option<Pocket>, DomainError>;

    /// Find a pocket by ID and hold a write lock on it until the unit of work
    /// ends
    async fn find_by_id_for_update(&self, id: &PocketId) -> Result<Option<Pocket>, DomainError>;

    /// Write back the pocket's current state
    async fn save(&self, pocket: &Pocket) -> Result<(), DomainError>;
}

/// An open storage transaction.
///
/// Writes made through `accounts()` and `pockets()` become visible together on
/// `commit` and are discarded on `rollback`. Dropping a unit of work without
/// committing discards its writes as well.
#[async_trait]
pub trait UnitOfWork: Send + Sync + Sized {
    type Accounts: AccountStore;
    type Pockets: PocketStore;

    fn accounts(&self) -> &Self::Accounts;

    fn pockets(&self) -> &Self::Pockets;

    async fn commit(self) -> Result<(), DomainError>;

    async fn rollback(self) -> Result<(), DomainError>;
}

/// Entry point to storage: opens units of work
#[async_trait]
pub trait TransactionalStore: Send + Sync + 'static {
    type Unit: UnitOfWork;

    /// Begin a new unit of work
    async fn begin(&self) -> Result<Self::Unit, DomainError>;
}
