//! PostgreSQL transaction handling
//!
//! `PostgresStore` opens a database transaction per unit of work. The
//! resulting `PostgresUnitOfWork` serves both account and pocket reads and
//! writes on that transaction (see `account_repo` and `pocket_repo`).

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::domain::ports::{TransactionalStore, UnitOfWork};
use crate::error::DomainError;

/// PostgreSQL implementation of TransactionalStore
pub struct PostgresStore {
    db: DatabaseConnection,
}

impl PostgresStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionalStore for PostgresStore {
    type Unit = PostgresUnitOfWork;

    async fn begin(&self) -> Result<Self::Unit, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(PostgresUnitOfWork { txn })
    }
}

/// A unit of work backed by one PostgreSQL transaction.
///
/// Rows read with `find_by_id_for_update` are locked with
/// `SELECT ... FOR UPDATE` until the transaction ends. Dropping it without
/// committing rolls back.
pub struct PostgresUnitOfWork {
    pub(super) txn: DatabaseTransaction,
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    type Accounts = Self;
    type Pockets = Self;

    fn accounts(&self) -> &Self::Accounts {
        self
    }

    fn pockets(&self) -> &Self::Pockets {
        self
    }

    async fn commit(self) -> Result<(), DomainError> {
        self.txn
            .commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn rollback(self) -> Result<(), DomainError> {
        self.txn
            .rollback()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}
