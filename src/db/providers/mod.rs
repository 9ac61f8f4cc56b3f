mod postgres;
mod registry;
mod sqlite;

use std::sync::Arc;
use std::time::Duration;

use sea_orm::ConnectOptions;

pub use registry::{DbProvider, DbProviderId, DbProviders, redact_url};

use self::{postgres::PostgresDbProvider, sqlite::SqliteDbProvider};
use crate::config::DatabaseConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;

pub fn default_registry() -> anyhow::Result<DbProviders> {
    DbProviders::new()
        .with_provider(Arc::new(PostgresDbProvider))?
        .with_provider(Arc::new(SqliteDbProvider))
}

/// Pool settings shared by every backend.
fn pool_options(cfg: &DatabaseConfig) -> anyhow::Result<ConnectOptions> {
    let mut options = ConnectOptions::new(cfg.connection_url()?);
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .sqlx_logging(false);
    Ok(options)
}
