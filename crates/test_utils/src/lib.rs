//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the loan
//! service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built product names
//! - `memory`: In-memory and failing `LoanRepository` adapters
//! - `database`: PostgreSQL testcontainer management
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod memory;
pub mod database;
pub mod generators;

pub use fixtures::*;
pub use memory::*;
pub use database::*;
pub use generators::*;
