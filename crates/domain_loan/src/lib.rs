//! Loan Domain
//!
//! A loan is a single persisted record: a database-assigned [`LoanId`] and a
//! [`ProductName`]. There are no relationships and no lifecycle beyond
//! "created, then read".
//!
//! # Examples
//!
//! ```rust
//! use domain_loan::{Loan, ProductName};
//! use core_kernel::LoanId;
//!
//! let name = ProductName::parse("  Personal Loan ").unwrap();
//! assert_eq!(name.as_str(), "Personal Loan");
//!
//! let loan = Loan::new(LoanId::new(1), name);
//! assert_eq!(loan.id.to_string(), "1");
//! ```
//!
//! [`LoanId`]: core_kernel::LoanId

pub mod error;
pub mod loan;
pub mod ports;

pub use error::LoanError;
pub use loan::{Loan, ProductName};
pub use ports::LoanRepository;
