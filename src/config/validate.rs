use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.request_timeout_secs == 0 {
        errors.push("general.request_timeout_secs must be > 0".to_string());
    }

    let database = &cfg.database;
    let has_url = database
        .url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty());
    if !has_url {
        if database.host.trim().is_empty() {
            errors.push("database.host must not be empty when database.url is unset".to_string());
        }
        if database.user.trim().is_empty() {
            errors.push("database.user must not be empty when database.url is unset".to_string());
        }
        if database.name.trim().is_empty() {
            errors.push("database.name must not be empty when database.url is unset".to_string());
        }
        if let Err(err) = database.connection_url() {
            errors.push(format!("{err:#}"));
        }
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if let Some(quotes) = cfg.quotes.as_ref() {
        if quotes.api_key.trim().is_empty() {
            errors.push("quotes.api_key must not be empty".to_string());
        }

        let base_url = quotes.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push("quotes.base_url must start with http:// or https://".to_string());
        }

        if quotes.timeout_secs == 0 {
            errors.push("quotes.timeout_secs must be > 0".to_string());
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
