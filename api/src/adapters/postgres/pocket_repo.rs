//! PostgreSQL adapter for PocketStore

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, QuerySelect, Set};

use super::PostgresUnitOfWork;
use crate::domain::entities::{AccountId, Pocket, PocketId};
use crate::domain::ports::PocketStore;
use crate::entity::pockets;
use crate::error::DomainError;

#[async_trait]
impl PocketStore for PostgresUnitOfWork {
    async fn find_by_id(&self, id: &PocketId) -> Result<Option<Pocket>, DomainError> {
        let result = pockets::Entity::find_by_id(id.0)
            .one(&self.txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id_for_update(&self, id: &PocketId) -> Result<Option<Pocket>, DomainError> {
        let result = pockets::Entity::find_by_id(id.0)
            .lock_exclusive()
            .one(&self.txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, pocket: &Pocket) -> Result<(), DomainError> {
        pockets::ActiveModel {
            id: Set(pocket.id.0),
            account_id: Set(pocket.account_id.0),
            balance: Set(pocket.balance),
        }
        .update(&self.txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<pockets::Model> for Pocket {
    fn from(model: pockets::Model) -> Self {
        Pocket {
            id: PocketId(model.id),
            account_id: AccountId(model.account_id),
            balance: model.balance,
        }
    }
}
