//! Router assembly and server startup.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::Agent;
use crate::config::Config;

use super::chat;

/// Shared state handed to every handler.
pub struct AppState {
    pub agent: Agent,
}

/// Build the application router.
///
/// CORS is restricted to the single configured frontend origin.
pub fn router(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat::chat))
        .route("/health", get(chat::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and block until it exits.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let allowed_origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid ALLOWED_ORIGIN: {}", config.allowed_origin))?;

    let agent = Agent::new(config);
    let state = Arc::new(AppState { agent });
    let app = router(state, allowed_origin);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
