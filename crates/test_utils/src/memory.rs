//! In-memory `LoanRepository` adapters
//!
//! `InMemoryLoanRepository` behaves like the PostgreSQL adapter without a
//! database: ids come from a counter starting at 1 and every call is atomic
//! under one mutex. `FailingLoanRepository` fails every call, for exercising
//! storage error paths.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use core_kernel::{HealthCheckable, LoanId, StorageError};
use domain_loan::{Loan, LoanRepository, ProductName};

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<LoanId, ProductName>,
}

/// Loan storage held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoanRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryLoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored loans
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl HealthCheckable for InMemoryLoanRepository {
    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[async_trait]
impl LoanRepository for InMemoryLoanRepository {
    async fn insert_loan(&self, product_name: &ProductName) -> Result<LoanId, StorageError> {
        let mut table = self.table.lock().await;
        table.next_id += 1;
        let id = LoanId::new(table.next_id);
        table.rows.insert(id, product_name.clone());
        Ok(id)
    }

    async fn get_loan(&self, id: LoanId) -> Result<Option<Loan>, StorageError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .get(&id)
            .map(|name| Loan::new(id, name.clone())))
    }
}

/// A repository whose backing store is always down
#[derive(Debug, Clone)]
pub struct FailingLoanRepository {
    error: StorageError,
}

impl FailingLoanRepository {
    pub fn new(error: StorageError) -> Self {
        Self { error }
    }
}

impl Default for FailingLoanRepository {
    fn default() -> Self {
        Self::new(StorageError::connection("connection refused"))
    }
}

#[async_trait]
impl HealthCheckable for FailingLoanRepository {
    async fn health_check(&self) -> Result<(), StorageError> {
        Err(self.error.clone())
    }
}

#[async_trait]
impl LoanRepository for FailingLoanRepository {
    async fn insert_loan(&self, _product_name: &ProductName) -> Result<LoanId, StorageError> {
        Err(self.error.clone())
    }

    async fn get_loan(&self, _id: LoanId) -> Result<Option<Loan>, StorageError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ProductNameFixtures;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let repo = InMemoryLoanRepository::new();

        let first = repo.insert_loan(&ProductNameFixtures::personal_loan()).await.unwrap();
        let second = repo.insert_loan(&ProductNameFixtures::mortgage()).await.unwrap();

        assert_eq!(first, LoanId::new(1));
        assert_eq!(second, LoanId::new(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_missing_loan_is_none() {
        let repo = InMemoryLoanRepository::new();
        assert!(repo.get_loan(LoanId::new(999)).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_failing_repository_fails() {
        let repo = FailingLoanRepository::default();
        assert!(repo.health_check().await.is_err());
        assert!(repo.get_loan(LoanId::new(1)).await.is_err());
    }
}
