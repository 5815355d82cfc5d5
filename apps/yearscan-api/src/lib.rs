//! Yearscan API server - year-reference extraction over HTTP
//!
//! Provides REST endpoints for:
//! - Document upload and synchronous extract/scan/report processing
//! - Report download by task id
//! - Health check

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router with all routes and middleware
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/upload", post(handlers::upload))
        .route("/api/download/:task_id", get(handlers::download))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
