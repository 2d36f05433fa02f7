// src/main.rs

use std::str::FromStr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use debate_arena::api::http::{api_router, root_handler};
use debate_arena::config::CONFIG;
use debate_arena::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = Level::from_str(&CONFIG.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting AI Debate backend");

    let app_state = Arc::new(AppState::from_config(&CONFIG));
    info!(
        "Debate roster: {}",
        app_state
            .providers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    // The reference deployment fronts a browser client, so CORS stays open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/api", api_router(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let bind_address = format!("{}:{}", CONFIG.host, CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("AI Debate server running on http://{bind_address}");

    axum::serve(listener, app).await?;

    Ok(())
}
