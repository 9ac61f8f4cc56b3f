use std::backtrace::Backtrace;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs the global subscriber for the todo server.
///
/// A parseable `RUST_LOG` overrides `logging.rust_log`; an unparseable one
/// is ignored in favour of the configured directives.
pub fn init_tracing(cfg: &LoggingConfig) -> Result<()> {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), &cfg.rust_log)?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
    set_panic_hook();
    Ok(())
}

fn build_filter(from_env: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(filter) = from_env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
        .with_context(|| format!("logging.rust_log '{configured}' is not a valid filter"))
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let thread = std::thread::current();
        let thread = thread.name().unwrap_or("<unnamed>");
        let backtrace = Backtrace::capture();

        match info.location() {
            Some(location) => tracing::error!(
                panic = %message,
                thread,
                location = %location,
                backtrace = %backtrace,
                "todo server panicked"
            ),
            None => tracing::error!(
                panic = %message,
                thread,
                backtrace = %backtrace,
                "todo server panicked"
            ),
        }
    }));
}
