//! PostgreSQL Loan Adapter
//!
//! Implements the `LoanRepository` port on top of [`ProductRepository`].
//! Failures are written to the diagnostic log with their database cause and
//! then handed to the caller as a [`StorageError`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use core_kernel::{HealthCheckable, LoanId, StorageError};
use domain_loan::{Loan, LoanRepository, ProductName};

use crate::error::DatabaseError;
use crate::pool::ping;
use crate::repositories::ProductRepository;

/// PostgreSQL-backed implementation of the `LoanRepository` port
#[derive(Debug, Clone)]
pub struct PostgresLoanAdapter {
    repository: ProductRepository,
    pool: PgPool,
}

impl PostgresLoanAdapter {
    /// Creates a new PostgreSQL loan adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ProductRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &ProductRepository {
        &self.repository
    }
}

fn db_to_storage_error(operation: &'static str, e: DatabaseError) -> StorageError {
    error!(operation, error = %e, "Storage operation failed");
    StorageError::from(e)
}

#[async_trait]
impl HealthCheckable for PostgresLoanAdapter {
    async fn health_check(&self) -> Result<(), StorageError> {
        ping(&self.pool)
            .await
            .map_err(|e| db_to_storage_error("health_check", e))
    }
}

#[async_trait]
impl LoanRepository for PostgresLoanAdapter {
    #[instrument(skip(self, product_name))]
    async fn insert_loan(&self, product_name: &ProductName) -> Result<LoanId, StorageError> {
        let id = self
            .repository
            .insert(product_name)
            .await
            .map_err(|e| db_to_storage_error("insert_loan", e))?;

        debug!(loan_id = %id, "Loan inserted");
        Ok(id)
    }

    #[instrument(skip(self, id), fields(loan_id = %id))]
    async fn get_loan(&self, id: LoanId) -> Result<Option<Loan>, StorageError> {
        debug!("Fetching loan by ID");
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| db_to_storage_error("get_loan", e))
    }
}
