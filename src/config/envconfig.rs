use std::collections::HashMap;
use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Configuration read from `APP_`-prefixed environment variables, with `__`
/// separating nested keys: `APP_DATABASE__HOST` maps to `database.host` and
/// `APP_QUOTES__API_KEY` to `quotes.api_key`. Empty variables count as unset.
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    /// Loads `.env` next to the crate manifest, falling back to the first
    /// `.env` found from the working directory upwards. Variables already in
    /// the process environment are never overwritten. A missing file is fine.
    fn load_dotenv() {
        let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(&manifest_env).or_else(|_| dotenvy::dotenv().map(|_| ()));
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
            .ignore_empty(true)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_environment(Self::environment())
    }

    /// Same as `from_env` but reads `vars` instead of the process
    /// environment, without touching `.env`.
    fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::from_environment(Self::environment().source(Some(vars)))
    }

    fn from_environment(environment: config_rs::Environment) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(environment)
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
