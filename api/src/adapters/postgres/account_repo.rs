//! PostgreSQL adapter for AccountStore

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, QuerySelect, Set};

use super::PostgresUnitOfWork;
use crate::domain::entities::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::entity::accounts;
use crate::error::DomainError;

#[async_trait]
impl AccountStore for PostgresUnitOfWork {
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find_by_id(id.0)
            .one(&self.txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Account::try_from).transpose()
    }

    async fn find_by_id_for_update(
        &self,
        id: &AccountId,
    ) -> Result<Option<Account>, DomainError> {
        let result = accounts::Entity::find_by_id(id.0)
            .lock_exclusive()
            .one(&self.txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Account::try_from).transpose()
    }

    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        accounts::ActiveModel {
            id: Set(account.id.0),
            status: Set(account.status.to_string()),
            balance: Set(account.balance),
        }
        .update(&self.txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<accounts::Model> for Account {
    type Error = DomainError;

    fn try_from(model: accounts::Model) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|e: String| {
            DomainError::Database(format!("account {}: {}", model.id, e))
        })?;

        Ok(Account {
            id: AccountId(model.id),
            status,
            balance: model.balance,
        })
    }
}
