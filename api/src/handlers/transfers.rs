//! Transfer handlers
//!
//! Endpoints moving funds out of an account, either into one of its pockets
//! or into another account.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{AccountId, PocketId};
use crate::domain::ports::TransactionalStore;
use crate::error::AppError;
use crate::AppState;

/// Request body for moving funds into a pocket
#[derive(Debug, Deserialize)]
pub struct PocketTransferRequest {
    pub pocket_id: Uuid,
    /// Missing amounts are rejected by the transfer rules, not by parsing
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Request body for moving funds to another account
#[derive(Debug, Deserialize)]
pub struct AccountTransferRequest {
    pub destination_id: Uuid,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// POST /accounts/:id/pocket-transfers
pub async fn transfer_to_pocket<S: TransactionalStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<PocketTransferRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(account_id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    state
        .transfer_service
        .transfer_to_pocket(
            &AccountId(account_id),
            &PocketId(request.pocket_id),
            request.amount,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /accounts/:id/transfers
pub async fn transfer_to_account<S: TransactionalStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<AccountTransferRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(origin_id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    state
        .transfer_service
        .transfer_to_account(
            &AccountId(origin_id),
            &AccountId(request.destination_id),
            request.amount,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
