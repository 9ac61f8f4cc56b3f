use std::sync::Arc;

use crate::{config::AppConfig, db::dao::TodoStore, services::quote_service::QuoteClient};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn TodoStore>,
    pub quotes: Option<QuoteClient>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn TodoStore>,
        quotes: Option<QuoteClient>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            store,
            quotes,
        })
    }
}
