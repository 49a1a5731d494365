//! Domain Adapters
//!
//! Adapter implementations for domain ports, connecting domain interfaces to
//! the PostgreSQL repositories.

pub mod loan;

pub use loan::PostgresLoanAdapter;
