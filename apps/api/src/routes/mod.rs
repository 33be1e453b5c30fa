pub mod health;
pub mod upload;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::BODY_LIMIT_FACTOR;
use crate::errors::{internal_error_response, AppError};
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!("Handler panicked: {detail}");
    internal_error_response()
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.upload_limit_bytes() * BODY_LIMIT_FACTOR;

    Router::new()
        .route(
            "/",
            get(health::home_handler).fallback(method_not_allowed),
        )
        .route(
            "/upload",
            post(upload::upload_handler).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
