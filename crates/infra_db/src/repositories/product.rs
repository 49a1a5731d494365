//! Product repository implementation
//!
//! Loans are persisted as rows of the `products` table. Every method opens
//! its own transaction: it commits before returning `Ok`, and any early
//! return through `?` drops the guard, which rolls the transaction back and
//! hands the connection back to the pool.

use sqlx::{FromRow, PgPool};

use core_kernel::LoanId;
use domain_loan::{Loan, ProductName};

use crate::error::DatabaseError;

/// Row shape of the `products` table
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub product_name: String,
}

impl TryFrom<ProductRow> for Loan {
    type Error = DatabaseError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let product_name = ProductName::parse(&row.product_name)
            .map_err(|e| DatabaseError::CorruptRow(format!("products.id={}: {}", row.id, e)))?;
        Ok(Loan::new(LoanId::new(row.id), product_name))
    }
}

/// Repository for the `products` table
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts one product row and returns the id the database assigned
    ///
    /// # Arguments
    ///
    /// * `product_name` - Already-trimmed, non-empty product name
    pub async fn insert(&self, product_name: &ProductName) -> Result<LoanId, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO products (product_name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(product_name.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await.map_err(DatabaseError::transaction)?;
        Ok(LoanId::new(id))
    }

    /// Retrieves a product row by primary key
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no row has the given id
    pub async fn get_by_id(&self, id: LoanId) -> Result<Option<Loan>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, product_name
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await.map_err(DatabaseError::transaction)?;
        row.map(Loan::try_from).transpose()
    }

    /// Counts stored rows
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_loan() {
        let loan = Loan::try_from(ProductRow {
            id: 9,
            product_name: "Payday Loan".to_string(),
        })
        .unwrap();

        assert_eq!(loan.id, LoanId::new(9));
        assert_eq!(loan.product_name.as_str(), "Payday Loan");
    }

    #[test]
    fn test_blank_row_is_corrupt() {
        let error = Loan::try_from(ProductRow {
            id: 4,
            product_name: "  ".to_string(),
        })
        .unwrap_err();

        assert!(matches!(error, DatabaseError::CorruptRow(ref msg) if msg.contains("products.id=4")));
    }
}
