//! PostgreSQL adapters
//!
//! Implementations of the storage ports using SeaORM and PostgreSQL.

pub mod account_repo;
pub mod pocket_repo;
pub mod store;


pub use store::{PostgresStore, PostgresUnitOfWork};
