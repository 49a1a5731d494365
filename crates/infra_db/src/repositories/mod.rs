//! Repository implementations
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types. Each public method is one transaction.

pub mod product;

pub use product::{ProductRepository, ProductRow};
