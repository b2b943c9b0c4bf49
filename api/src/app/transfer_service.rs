//! Transfer service
//!
//! Moves funds from an account into one of its pockets, or between two
//! accounts. Every operation runs inside one unit of work: all checks happen
//! before any write, and the writes are committed together or rolled back.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{fits_balance_scale, Account, AccountId, PocketId};
use crate::domain::ports::{AccountStore, PocketStore, TransactionalStore, UnitOfWork};
use crate::error::DomainError;

/// Service orchestrating balance transfers
pub struct TransferService<S>
where
    S: TransactionalStore,
{
    store: Arc<S>,
}

impl<S> TransferService<S>
where
    S: TransactionalStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Move `amount` from an account into one of its own pockets.
    ///
    /// Checks, in order: account exists, account is active, pocket exists,
    /// pocket belongs to the account, amount is positive with at most four
    /// decimal places, balance covers it.
    pub async fn transfer_to_pocket(
        &self,
        account_id: &AccountId,
        pocket_id: &PocketId,
        amount: Option<Decimal>,
    ) -> Result<(), DomainError> {
        tracing::info!(%account_id, %pocket_id, "Starting transfer from account to pocket");

        let unit = self.store.begin().await?;
        let result = move_to_pocket(&unit, account_id, pocket_id, amount).await;
        finish(unit, result).await?;

        tracing::info!(%account_id, %pocket_id, "Finished transfer from account to pocket");
        Ok(())
    }

    /// Move `amount` from one account to another.
    ///
    /// Checks, in order: amount is valid, accounts differ, origin exists,
    /// destination exists, origin is active, destination is active, origin
    /// balance covers the amount.
    pub async fn transfer_to_account(
        &self,
        origin_id: &AccountId,
        destination_id: &AccountId,
        amount: Option<Decimal>,
    ) -> Result<(), DomainError> {
        tracing::info!(%origin_id, %destination_id, "Starting transfer between accounts");

        let unit = self.store.begin().await?;
        let result = move_to_account(&unit, origin_id, destination_id, amount).await;
        finish(unit, result).await?;

        tracing::info!(%origin_id, %destination_id, "Finished transfer between accounts");
        Ok(())
    }
}

async fn move_to_pocket<U: UnitOfWork>(
    unit: &U,
    account_id: &AccountId,
    pocket_id: &PocketId,
    amount: Option<Decimal>,
) -> Result<(), DomainError> {
    let mut account = unit
        .accounts()
        .find_by_id_for_update(account_id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("account {}", account_id)))?;

    if !account.is_active() {
        return Err(rule("account blocked"));
    }

    let mut pocket = unit
        .pockets()
        .find_by_id_for_update(pocket_id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("pocket {}", pocket_id)))?;

    if !pocket.belongs_to(account_id) {
        return Err(rule("pocket does not belong to account"));
    }

    let amount = positive_amount(amount)?;
    ensure_covers(&account, amount)?;

    account.balance -= amount;
    pocket.balance = credit(pocket.balance, amount)?;

    unit.accounts().save(&account).await?;
    unit.pockets().save(&pocket).await?;

    Ok(())
}

async fn move_to_account<U: UnitOfWork>(
    unit: &U,
    origin_id: &AccountId,
    destination_id: &AccountId,
    amount: Option<Decimal>,
) -> Result<(), DomainError> {
    let amount = positive_amount(amount)?;

    if origin_id == destination_id {
        return Err(rule("same account"));
    }

    let (origin, destination) = lock_pair(unit, origin_id, destination_id).await?;

    let mut origin = origin
        .ok_or_else(|| DomainError::NotFound(format!("origin account {}", origin_id)))?;

    let mut destination = destination.ok_or_else(|| {
        DomainError::NotFound(format!("destination account {}", destination_id))
    })?;

    if !origin.is_active() {
        return Err(rule("origin blocked"));
    }

    if !destination.is_active() {
        return Err(rule("destination blocked"));
    }

    ensure_covers(&origin, amount)?;

    origin.balance -= amount;
    destination.balance = credit(destination.balance, amount)?;

    unit.accounts().save(&origin).await?;
    unit.accounts().save(&destination).await?;

    Ok(())
}

/// Lock both accounts lowest id first, whichever way the money moves.
///
/// Returns `(origin, destination)`.
async fn lock_pair<U: UnitOfWork>(
    unit: &U,
    origin_id: &AccountId,
    destination_id: &AccountId,
) -> Result<(Option<Account>, Option<Account>), DomainError> {
    let accounts = unit.accounts();

    if origin_id < destination_id {
        let origin = accounts.find_by_id_for_update(origin_id).await?;
        let destination = accounts.find_by_id_for_update(destination_id).await?;
        Ok((origin, destination))
    } else {
        let destination = accounts.find_by_id_for_update(destination_id).await?;
        let origin = accounts.find_by_id_for_update(origin_id).await?;
        Ok((origin, destination))
    }
}

/// Commit on success; on failure roll back and hand back the original error.
async fn finish<U: UnitOfWork>(
    unit: U,
    result: Result<(), DomainError>,
) -> Result<(), DomainError> {
    match result {
        Ok(()) => unit.commit().await,
        Err(e) => {
            tracing::debug!(error = %e, "Transfer rejected, rolling back");
            if let Err(rollback_err) = unit.rollback().await {
                tracing::error!(error = %rollback_err, "Rollback failed");
            }
            Err(e)
        }
    }
}

/// Amounts must be positive and storable without rounding.
fn positive_amount(amount: Option<Decimal>) -> Result<Decimal, DomainError> {
    match amount {
        Some(amount) if amount > Decimal::ZERO && fits_balance_scale(amount) => Ok(amount),
        _ => Err(rule("invalid amount")),
    }
}

fn ensure_covers(account: &Account, amount: Decimal) -> Result<(), DomainError> {
    if account.can_cover(amount) {
        Ok(())
    } else {
        Err(rule("insufficient funds"))
    }
}

fn credit(balance: Decimal, amount: Decimal) -> Result<Decimal, DomainError> {
    balance
        .checked_add(amount)
        .ok_or_else(|| rule("balance overflow"))
}

fn rule(msg: &str) -> DomainError {
    DomainError::BusinessRule(msg.to_string())
}
