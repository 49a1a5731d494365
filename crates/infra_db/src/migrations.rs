//! Embedded schema migrations
//!
//! The SQL files under `migrations/` are compiled into the binary and applied
//! once at startup, before the server accepts requests.

use sqlx::migrate::Migrator;
use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Migrations embedded from this crate's `migrations/` directory
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Applies any pending migrations
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations...");

    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}
