//! Ports and Adapters Infrastructure
//!
//! Domains define port traits (for example `LoanRepository`); infrastructure
//! crates implement them. This module holds the pieces every port shares:
//! the storage error kind and the health check trait.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        HTTP handlers         │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │   Port traits (per domain)   │
//! └──────────────────────────────┘
//!        ▲                 ▲
//!        │                 │
//! ┌──────────────┐  ┌──────────────┐
//! │  PostgreSQL  │  │  In-memory   │
//! │   adapter    │  │ (test_utils) │
//! └──────────────┘  └──────────────┘
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Error type for storage port operations
///
/// Every failure raised by a persistence backend is folded into this one
/// kind before it crosses the port boundary. The variants keep the cause
/// for logging; callers are expected to treat them uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Connection to the backing store failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// No connection became available in time
    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    /// A schema constraint rejected the write
    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    /// A statement failed for any other reason
    #[error("Query failed: {message}")]
    Query { message: String },

    /// Schema migration failed
    #[error("Migration failed: {message}")]
    Migration { message: String },
}

impl StorageError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StorageError::Connection {
            message: message.into(),
        }
    }

    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        StorageError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a Constraint error
    pub fn constraint(message: impl Into<String>) -> Self {
        StorageError::Constraint {
            message: message.into(),
        }
    }

    /// Creates a Query error
    pub fn query(message: impl Into<String>) -> Self {
        StorageError::Query {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StorageError::Connection { .. } | StorageError::Unavailable { .. }
        )
    }
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Verifies the adapter can reach its backing store
    async fn health_check(&self) -> Result<(), StorageError>;
}
