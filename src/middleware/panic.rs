use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{error::AppError, response::JsonApiResponse};

pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_to_json)
}

/// Panic details only reach the client in debug builds.
fn panic_to_json(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };

    let err = if cfg!(debug_assertions) {
        AppError::internal(format!("internal server error: {details}"))
    } else {
        AppError::internal("internal server error")
    };
    JsonApiResponse::from_error(&err).into_response()
}
