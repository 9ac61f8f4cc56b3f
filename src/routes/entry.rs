use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

use super::api;

pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(API_PREFIX, api::router(state))
}

/// The routed API wrapped in the request timeout, JSON error envelope,
/// panic catcher and tracing layers, innermost first.
pub fn app(state: Arc<AppState>) -> Router {
    let timeout = Duration::from_secs(state.config.general.request_timeout_secs);
    router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
