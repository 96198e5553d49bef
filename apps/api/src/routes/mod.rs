pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::certificate::handlers;
use crate::errors::AppError;
use crate::layout::handlers as layout_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.request_body_limit();

    Router::new()
        .route("/health", get(health::health_handler))
        // Certificate API
        .route(
            "/api/v1/certificates/defaults",
            get(handlers::handle_defaults),
        )
        .route("/api/v1/certificates/types", get(handlers::handle_types))
        .route(
            "/api/v1/certificates/preview",
            post(handlers::handle_preview),
        )
        .route("/api/v1/certificates/print", post(handlers::handle_print))
        // Layout API
        .route("/api/v1/layout/fit", post(layout_handlers::handle_fit))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
