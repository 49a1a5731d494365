//! PostgreSQL loan adapter tests
//!
//! These start a Postgres container; run with `cargo test -- --ignored`
//! on a machine with Docker.

use std::collections::HashSet;
use std::sync::Arc;

use core_kernel::{HealthCheckable, LoanId, StorageError};
use domain_loan::{LoanRepository, ProductName};
use infra_db::{ping, run_migrations, DatabaseError};
use test_utils::{create_isolated_test_database, ProductNameFixtures};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_then_get_round_trips() {
    let db = create_isolated_test_database().await.unwrap();
    let loans = db.loan_adapter();

    let name = ProductNameFixtures::named("  Home   Equity  ");
    let id = loans.insert_loan(&name).await.unwrap();
    let loan = loans.get_loan(id).await.unwrap().expect("loan should exist");

    assert_eq!(loan.id, id);
    assert_eq!(loan.product_name.as_str(), "Home   Equity");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_first_id_is_one() {
    let db = create_isolated_test_database().await.unwrap();
    let loans = db.loan_adapter();

    let id = loans.insert_loan(&ProductNameFixtures::personal_loan()).await.unwrap();

    assert_eq!(id, LoanId::new(1));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unknown_id_is_none() {
    let db = create_isolated_test_database().await.unwrap();

    let loan = db.loan_adapter().get_loan(LoanId::new(999)).await.unwrap();

    assert!(loan.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_check_constraint_rejects_blank_names() {
    let db = create_isolated_test_database().await.unwrap();

    let err = sqlx::query("INSERT INTO products (product_name) VALUES ('   ')")
        .execute(db.pool())
        .await
        .unwrap_err();

    assert!(matches!(
        DatabaseError::from(err),
        DatabaseError::ConstraintViolation(_)
    ));
    assert_eq!(db.loan_adapter().repository().count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_failed_insert_rolls_back_and_releases_connection() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = db.loan_adapter().repository().clone();

    // Postgres TEXT cannot hold NUL, so the INSERT fails inside the transaction
    let name = ProductName::parse("Bridge\0Loan").unwrap();
    let err = repository.insert(&name).await.unwrap_err();

    assert!(matches!(err, DatabaseError::QueryFailed(_)));
    assert_eq!(repository.count().await.unwrap(), 0);

    repository.insert(&ProductNameFixtures::mortgage()).await.unwrap();
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_failed_insert_surfaces_as_query_storage_error() {
    let db = create_isolated_test_database().await.unwrap();
    let loans = db.loan_adapter();

    let name = ProductName::parse("\0").unwrap();
    let err = loans.insert_loan(&name).await.unwrap_err();

    assert!(matches!(err, StorageError::Query { .. }));
    assert_eq!(loans.repository().count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_concurrent_inserts_get_distinct_ids() {
    let db = create_isolated_test_database().await.unwrap();
    let loans = Arc::new(db.loan_adapter());
    let names = ProductNameFixtures::distinct(32);

    let mut handles = Vec::new();
    for name in names.clone() {
        let loans = Arc::clone(&loans);
        handles.push(tokio::spawn(async move {
            let id = loans.insert_loan(&name).await.unwrap();
            (id, name)
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let (id, name) = handle.await.unwrap();
        assert!(ids.insert(id), "id {id} issued twice");

        let stored = loans.get_loan(id).await.unwrap().unwrap();
        assert_eq!(stored.product_name, name);
    }
    assert_eq!(ids.len(), names.len());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_migrations_are_idempotent() {
    let db = create_isolated_test_database().await.unwrap();

    run_migrations(db.pool()).await.unwrap();
    ping(db.pool()).await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_clear_data_resets_ids() {
    let db = create_isolated_test_database().await.unwrap();
    let loans = db.loan_adapter();

    loans.insert_loan(&ProductNameFixtures::mortgage()).await.unwrap();
    db.clear_data().await.unwrap();
    let id = loans.insert_loan(&ProductNameFixtures::personal_loan()).await.unwrap();

    assert_eq!(id, LoanId::new(1));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_closed_pool_surfaces_storage_error() {
    let db = create_isolated_test_database().await.unwrap();
    let loans = db.loan_adapter();
    db.pool().close().await;

    let err = loans.insert_loan(&ProductNameFixtures::random()).await.unwrap_err();

    assert!(matches!(err, StorageError::Connection { .. }));
    assert!(loans.health_check().await.is_err());
}
