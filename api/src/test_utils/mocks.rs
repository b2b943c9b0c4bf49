//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use rust_decimal::Decimal;

use crate::domain::entities::{fits_balance_scale, Account, AccountId, Pocket, PocketId};
use crate::domain::ports::{AccountStore, PocketStore, TransactionalStore, UnitOfWork};
use crate::error::DomainError;

// ============================================================================
// In-Memory Store
// ============================================================================

#[derive(Debug, Clone, Default)]
struct Tables {
    accounts: HashMap<AccountId, Account>,
    pockets: HashMap<PocketId, Pocket>,
}

#[derive(Debug, Clone, Default)]
struct Faults {
    account_saves: HashSet<AccountId>,
    pocket_saves: bool,
}

/// In-memory TransactionalStore.
///
/// A unit of work holds the table lock for its whole lifetime, so units run
/// one at a time. Writes go to a staged copy that replaces the tables on
/// commit.
///
/// Row locking is not modelled. Instead every `find_by_id_for_update` on an
/// account is recorded so tests can check the order rows would be locked in.
/// Saves reject balances with more decimal places than the database column
/// holds.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Arc<AsyncMutex<Tables>>,
    faults: Faults,
    account_locks: Arc<Mutex<Vec<AccountId>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an account for testing
    pub fn with_account(self, account: Account) -> Self {
        self.tables
            .try_lock()
            .unwrap()
            .accounts
            .insert(account.id, account);
        self
    }

    /// Pre-populate with a pocket for testing
    pub fn with_pocket(self, pocket: Pocket) -> Self {
        self.tables
            .try_lock()
            .unwrap()
            .pockets
            .insert(pocket.id, pocket);
        self
    }

    /// Make every save of the given account fail with a database error
    pub fn failing_saves_for_account(mut self, id: AccountId) -> Self {
        self.faults.account_saves.insert(id);
        self
    }

    /// Make every pocket save fail with a database error
    pub fn failing_pocket_saves(mut self) -> Self {
        self.faults.pocket_saves = true;
        self
    }

    /// Committed state of an account
    pub async fn account(&self, id: &AccountId) -> Option<Account> {
        self.tables.lock().await.accounts.get(id).cloned()
    }

    /// Committed state of a pocket
    pub async fn pocket(&self, id: &PocketId) -> Option<Pocket> {
        self.tables.lock().await.pockets.get(id).cloned()
    }

    /// Accounts read for update so far, in the order they were locked
    pub fn account_locks(&self) -> Vec<AccountId> {
        self.account_locks.lock().unwrap().clone()
    }
}

fn check_scale(
    kind: &str,
    id: impl std::fmt::Display,
    balance: Decimal,
) -> Result<(), DomainError> {
    if fits_balance_scale(balance) {
        Ok(())
    } else {
        Err(DomainError::Database(format!(
            "{} {} balance {} exceeds column scale",
            kind, id, balance
        )))
    }
}

#[async_trait]
impl TransactionalStore for InMemoryStore {
    type Unit = InMemoryUnitOfWork;

    async fn begin(&self) -> Result<Self::Unit, DomainError> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = Mutex::new((*guard).clone());

        Ok(InMemoryUnitOfWork {
            guard,
            staged,
            faults: self.faults.clone(),
            account_locks: self.account_locks.clone(),
        })
    }
}

pub struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    staged: Mutex<Tables>,
    faults: Faults,
    account_locks: Arc<Mutex<Vec<AccountId>>>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    type Accounts = Self;
    type Pockets = Self;

    fn accounts(&self) -> &Self::Accounts {
        self
    }

    fn pockets(&self) -> &Self::Pockets {
        self
    }

    async fn commit(mut self) -> Result<(), DomainError> {
        *self.guard = self.staged.into_inner().unwrap();
        Ok(())
    }

    async fn rollback(self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[async_trait]
impl AccountStore for InMemoryUnitOfWork {
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let staged = self.staged.lock().unwrap();
        Ok(staged.accounts.get(id).cloned())
    }

    async fn find_by_id_for_update(
        &self,
        id: &AccountId,
    ) -> Result<Option<Account>, DomainError> {
        self.account_locks.lock().unwrap().push(*id);
        AccountStore::find_by_id(self, id).await
    }

    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        if self.faults.account_saves.contains(&account.id) {
            return Err(DomainError::Database(format!(
                "write to account {} failed",
                account.id
            )));
        }
        check_scale("account", account.id, account.balance)?;

        let mut staged = self.staged.lock().unwrap();
        match staged.accounts.get_mut(&account.id) {
            Some(existing) => {
                *existing = account.clone();
                Ok(())
            }
            None => Err(DomainError::Database(format!(
                "account {} does not exist",
                account.id
            ))),
        }
    }
}

#[async_trait]
impl PocketStore for InMemoryUnitOfWork {
    async fn find_by_id(&self, id: &PocketId) -> Result<Option<Pocket>, DomainError> {
        let staged = self.staged.lock().unwrap();
        Ok(staged.pockets.get(id).cloned())
    }

    async fn find_by_id_for_update(&self, id: &PocketId) -> Result<Option<Pocket>, DomainError> {
        PocketStore::find_by_id(self, id).await
    }

    async fn save(&self, pocket: &Pocket) -> Result<(), DomainError> {
        if self.faults.pocket_saves {
            return Err(DomainError::Database(format!(
                "write to pocket {} failed",
                pocket.id
            )));
        }
        check_scale("pocket", pocket.id, pocket.balance)?;

        let mut staged = self.staged.lock().unwrap();
        match staged.pockets.get_mut(&pocket.id) {
            Some(existing) => {
                *existing = pocket.clone();
                Ok(())
            }
            None => Err(DomainError::Database(format!(
                "pocket {} does not exist",
                pocket.id
            ))),
        }
    }
}
