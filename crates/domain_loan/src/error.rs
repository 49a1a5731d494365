//! Loan domain errors

use thiserror::Error;

/// Errors that can occur in the loan domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    /// The product name was empty once surrounding whitespace was removed
    #[error("product name must not be empty")]
    EmptyProductName,
}
