// src/api/http/router.rs
// HTTP router composition

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{chat::chat_handler, handlers::health_handler, verse::verse_handler};
use crate::state::AppState;

/// API routes, nested under /api by [`create_router`]
pub fn http_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/ikhtiyarah", post(verse_handler))
}

/// Create the web server router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root level
        .route("/health", get(health_handler))
        .nest("/api", http_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
