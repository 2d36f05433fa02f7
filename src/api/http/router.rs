// src/api/http/router.rs
// HTTP router composition for the debate API

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use super::{
    debate::{debate_stream, start_debate},
    handlers::health_handler,
};
use crate::state::AppState;

/// Debate API router. Nested under /api in main.rs.
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_handler))
        // Debate
        .route("/debate", post(start_debate))
        .route("/debate/stream", get(debate_stream))
        .with_state(app_state)
}
