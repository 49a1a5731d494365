//! Loan Domain Ports
//!
//! The HTTP layer talks to storage only through [`LoanRepository`]. The
//! PostgreSQL adapter lives in `infra_db`; in-memory adapters used by tests
//! live in `test_utils`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_loan::LoanRepository;
//!
//! let loans: Arc<dyn LoanRepository> = Arc::new(PgLoanRepository::new(pool));
//! let id = loans.insert_loan(&ProductName::parse("Personal Loan")?).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{HealthCheckable, LoanId, StorageError};

use crate::loan::{Loan, ProductName};

/// Storage operations for loans
///
/// Implementations scope every call to its own unit of work: the change is
/// either committed before the call returns or rolled back.
#[async_trait]
pub trait LoanRepository: HealthCheckable + Send + Sync + 'static {
    /// Persists a new loan and returns its freshly assigned identifier
    async fn insert_loan(&self, product_name: &ProductName) -> Result<LoanId, StorageError>;

    /// Looks up a loan by identifier; `Ok(None)` when no row matches
    async fn get_loan(&self, id: LoanId) -> Result<Option<Loan>, StorageError>;
}
