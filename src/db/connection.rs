use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers::{self, redact_url};
use crate::config::DatabaseConfig;

/// Opens the pool through the matching provider and, when enabled, brings
/// the schema in line with the entities.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let url = cfg.connection_url()?;
    let provider = providers::default_registry()?.provider_for_url(&url)?;
    info!(provider = %provider.id(), url = %redact_url(&url), "connecting to database");

    let db = provider
        .connect(cfg)
        .await
        .context("failed to connect to database")?;
    provider.post_connect(&db, cfg).await?;

    if cfg.sync_schema {
        info!("syncing database schema from entities");
        db.get_schema_registry("todo_server::db::entities::*")
            .sync(&db)
            .await
            .context("failed to sync database schema")?;
    }
    Ok(db)
}
