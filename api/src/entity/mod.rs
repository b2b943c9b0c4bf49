//! SeaORM entities
//!
//! Table mappings for the `accounts` and `pockets` tables.
//! Schema lives in `migrations/0001_accounts_pockets.sql`.

pub mod accounts;
pub mod pockets;
