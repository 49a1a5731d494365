//! Pre-built Test Fixtures

use domain_loan::ProductName;
use fake::faker::lorem::en::Words;
use fake::Fake;

/// Fixture for product name test data
pub struct ProductNameFixtures;

impl ProductNameFixtures {
    /// The canonical example product
    pub fn personal_loan() -> ProductName {
        Self::named("Personal Loan")
    }

    /// A second, distinct product
    pub fn mortgage() -> ProductName {
        Self::named("Fixed Rate Mortgage")
    }

    /// Parses a literal, panicking if it is blank
    pub fn named(raw: &str) -> ProductName {
        ProductName::parse(raw).expect("fixture product name must not be blank")
    }

    /// A random multi-word product name
    pub fn random() -> ProductName {
        let words: Vec<String> = Words(2..5).fake();
        Self::named(&format!("{} loan", words.join(" ")))
    }

    /// `count` distinct product names
    pub fn distinct(count: usize) -> Vec<ProductName> {
        (0..count)
            .map(|i| Self::named(&format!("Product {i:04}")))
            .collect()
    }
}
