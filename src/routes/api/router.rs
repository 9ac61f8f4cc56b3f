use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{health, quote, todo};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(todo::router(state.clone()))
        .merge(quote::router(state))
}
