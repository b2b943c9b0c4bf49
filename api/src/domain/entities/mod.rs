//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod account;
pub mod pocket;

pub use account::{fits_balance_scale, Account, AccountId, AccountStatus};
pub use pocket::{Pocket, PocketId};
