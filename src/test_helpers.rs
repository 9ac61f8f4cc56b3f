use std::sync::Arc;

use axum::Router;

use crate::{
    config::AppConfig,
    db::dao::MemoryTodoDao,
    routes::app,
    services::quote_service::QuoteClient,
    state::AppState,
};

/// State backed by a fresh in-memory store. The store handle is returned so
/// tests can inspect what reached it.
pub fn test_state(quotes: Option<QuoteClient>) -> (Arc<AppState>, MemoryTodoDao) {
    let store = MemoryTodoDao::new();
    let state = AppState::new(AppConfig::default(), Arc::new(store.clone()), quotes);
    (state, store)
}

pub fn test_router() -> Router {
    let (state, _) = test_state(None);
    app(state)
}
