//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use servis_core::error::{AppError, ErrorKind};

/// Apply every migration under `migrations/` that has not run yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to run migrations", e))?;

    info!("Database schema is up to date");
    Ok(())
}
