use std::sync::Arc;

use serde_json::json;

use crate::auth::PasswordMode;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::{DatabaseManager, PgRepository};
use crate::services::CareerService;

/// `career schema`
pub async fn schema(output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect_lazy(&config::config().database)?;
    DatabaseManager::ensure_schema(&pool).await?;
    pool.close().await;

    output_success(output_format, "Schema is up to date", None)
}

/// `career seed` - same rules as `POST /api/init`
pub async fn seed(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();
    let pool = DatabaseManager::connect_lazy(&config.database)?;
    DatabaseManager::ensure_schema(&pool).await?;

    let mode = PasswordMode::from_legacy_flag(config.security.legacy_compat);
    let career = CareerService::new(Arc::new(PgRepository::new(pool.clone())), mode);
    let outcome = career.init_data().await?;
    pool.close().await;

    output_success(
        output_format,
        outcome.message(),
        Some(json!({ "seeded": outcome == crate::services::SeedOutcome::Initialized })),
    )
}
