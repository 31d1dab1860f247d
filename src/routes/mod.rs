//! Route modules for MCQ Extract Server

pub mod health;
pub mod process;
pub mod ui;

use axum::{http::header, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION]);

    let api = process::router(state.config().upload.max_bytes)
        .route("/health", get(health::health_check));

    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
