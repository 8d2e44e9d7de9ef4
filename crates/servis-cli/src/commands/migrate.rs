//! Apply database migrations.

use tracing::info;

use servis_core::config::AppConfig;
use servis_core::error::AppError;
use servis_database::DatabasePool;
use servis_database::migration::run_migrations;

use crate::output;

/// Connect and apply every pending migration.
pub async fn execute(mut config: AppConfig) -> Result<(), AppError> {
    // Apply explicitly below rather than as a side effect of connecting.
    config.database.run_migrations = false;
    let pool = DatabasePool::connect(&config.database).await?;

    info!("Applying pending migrations");
    run_migrations(pool.pool()).await?;
    pool.close().await;

    output::print_success("All migrations applied.");
    Ok(())
}
