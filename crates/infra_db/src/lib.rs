//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL storage for the loan service using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern:
//! - `repositories` hold the SQL and map rows to domain types
//! - `adapters` implement the domain port traits on top of the repositories,
//!   translating `DatabaseError` into the port-level `StorageError`
//!
//! Every repository call runs inside its own transaction, committed on
//! success and rolled back when the transaction guard is dropped on failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresLoanAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new(url)).await?;
//! run_migrations(&pool).await?;
//! let loans = PostgresLoanAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, ping, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::{run_migrations, MIGRATOR};
pub use repositories::ProductRepository;
pub use adapters::PostgresLoanAdapter;
