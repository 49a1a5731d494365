//! Core Kernel - Foundational types for the loan service
//!
//! This crate provides the building blocks shared by the domain, storage and
//! HTTP layers:
//! - Strongly-typed identifiers
//! - The kernel error type
//! - Port abstractions (storage errors and health checks)

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{LoanId, ParseIdError};
pub use error::CoreError;
pub use ports::{HealthCheckable, StorageError};
