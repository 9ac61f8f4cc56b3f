use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    error::AppError,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, quote_service::Quote},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quote", get(random_quote))
        .with_state(state)
}

async fn random_quote(State(state): State<Arc<AppState>>) -> ApiResult<Quote> {
    let services = ServiceContext::from_state(state.as_ref());
    let client = services
        .quotes()
        .ok_or_else(|| AppError::service_unavailable("Quote service is not configured"))?;
    let quote = client.random().await?;
    JsonApiResponse::ok(quote)
}
