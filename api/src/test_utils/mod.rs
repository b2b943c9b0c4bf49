//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory store stands in for PostgreSQL in service and HTTP tests;
//! it can be told to fail specific writes to exercise rollback paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
