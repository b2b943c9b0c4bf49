//! Account handlers
//!
//! Read-only endpoints for current balances.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use uuid::Uuid;

use crate::domain::entities::{Account, AccountId, Pocket, PocketId};
use crate::domain::ports::TransactionalStore;
use crate::error::AppError;
use crate::AppState;

/// GET /accounts/:id
pub async fn get_account<S: TransactionalStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let account = state.account_service.get_account(&AccountId(id)).await?;
    Ok(Json(account))
}

/// GET /pockets/:id
pub async fn get_pocket<S: TransactionalStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Pocket>, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let pocket = state.account_service.get_pocket(&PocketId(id)).await?;
    Ok(Json(pocket))
}
