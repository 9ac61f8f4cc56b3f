pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{AppConfig, DatabaseConfig, GeneralConfig, LoggingConfig, QuoteConfig};
pub use envconfig::EnvConfig;
