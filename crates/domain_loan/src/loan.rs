//! The loan record and its product name value object

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::LoanId;

use crate::error::LoanError;

/// A product name that is known to be non-empty after trimming
///
/// The only way to obtain one is [`ProductName::parse`], so any value that
/// reaches the storage layer already satisfies the invariant. Internal
/// whitespace is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductName(String);

/// Characters stripped from either end of a product name
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl ProductName {
    /// Trims surrounding whitespace and rejects an empty result
    pub fn parse(raw: &str) -> Result<Self, LoanError> {
        let trimmed = raw.trim_matches(is_padding);
        if trimmed.is_empty() {
            return Err(LoanError::EmptyProductName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = LoanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl<'de> Deserialize<'de> for ProductName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A persisted loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Database-assigned identifier, immutable once issued
    pub id: LoanId,
    /// Name of the loan product
    pub product_name: ProductName,
}

impl Loan {
    pub fn new(id: LoanId, product_name: ProductName) -> Self {
        Self { id, product_name }
    }
}
