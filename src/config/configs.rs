use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub quotes: Option<QuoteConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Connection settings for the todo database.
///
/// `url` wins when set; otherwise a Postgres URL is assembled from the
/// individual host/port/user/password/name parts, percent-encoding the
/// credentials and database name.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_idle: u32,
    pub sync_schema: bool,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> Result<String> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            _ => self.assembled_url(),
        }
    }

    fn assembled_url(&self) -> Result<String> {
        let mut url = Url::parse(&format!("postgres://{}:{}", self.host.trim(), self.port))
            .with_context(|| format!("database.host '{}' is not a valid host", self.host))?;
        url.set_username(&self.user)
            .map_err(|()| anyhow!("database.user cannot be placed in a connection url"))?;
        url.set_password(Some(&self.password))
            .map_err(|()| anyhow!("database.password cannot be placed in a connection url"))?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("database url has no path"))?
            .push(&self.name);
        Ok(url.into())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: defaults::DEFAULT_DB_HOST.to_string(),
            port: defaults::DEFAULT_DB_PORT,
            user: defaults::DEFAULT_DB_USER.to_string(),
            password: defaults::DEFAULT_DB_PASSWORD.to_string(),
            name: defaults::DEFAULT_DB_NAME.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS as u32,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE as u32,
            sync_schema: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteConfig {
    pub api_key: String,
    #[serde(default = "default_quotes_host")]
    pub host: String,
    #[serde(default = "default_quotes_base_url")]
    pub base_url: String,
    #[serde(default = "default_quotes_language")]
    pub language_code: String,
    #[serde(default = "default_quotes_timeout_secs")]
    pub timeout_secs: u64,
}

impl QuoteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: default_quotes_host(),
            base_url: default_quotes_base_url(),
            language_code: default_quotes_language(),
            timeout_secs: default_quotes_timeout_secs(),
        }
    }
}

fn default_quotes_host() -> String {
    defaults::DEFAULT_QUOTES_HOST.to_string()
}

fn default_quotes_base_url() -> String {
    defaults::DEFAULT_QUOTES_BASE_URL.to_string()
}

fn default_quotes_language() -> String {
    defaults::DEFAULT_QUOTES_LANGUAGE.to_string()
}

fn default_quotes_timeout_secs() -> u64 {
    defaults::DEFAULT_QUOTES_TIMEOUT_SECS
}
