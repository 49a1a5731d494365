//! Request and response bodies

pub mod loan;
