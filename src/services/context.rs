use std::sync::Arc;

use crate::{
    db::dao::TodoStore,
    services::{quote_service::QuoteClient, todo_service::TodoService},
    state::AppState,
};

/// Builds services from the shared handles of a request.
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn TodoStore>,
    quotes: Option<QuoteClient>,
}

impl ServiceContext {
    pub fn new(store: Arc<dyn TodoStore>, quotes: Option<QuoteClient>) -> Self {
        Self { store, quotes }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.store.clone(), state.quotes.clone())
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(self.store.clone())
    }

    /// `None` when no quote API key is configured.
    pub fn quotes(&self) -> Option<&QuoteClient> {
        self.quotes.as_ref()
    }
}
