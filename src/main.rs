use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};

use todo_server::{
    config::AppConfig,
    db::{connection, dao::TodoDao},
    logging::init_tracing,
    routes::app,
    services::quote_service::QuoteClient,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging)?;

    let db = connection::connect(&cfg.database).await?;
    let store = Arc::new(TodoDao::new(&db));

    let quotes = match cfg.quotes.clone() {
        Some(quote_cfg) => Some(QuoteClient::new(quote_cfg).context("failed to build quote client")?),
        None => {
            info!("quotes.api_key not set; /quote will answer 503");
            None
        }
    };

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid general.host/general.port")?;
    let state = AppState::new(cfg, store, quotes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
