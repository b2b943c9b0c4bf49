//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod transfers;

pub use accounts::{get_account, get_pocket};
pub use transfers::{transfer_to_account, transfer_to_pocket};
