//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router carries the rendered index page at `/`, the WebSocket
//! endpoint, and a health probe. Every response passes through request
//! tracing, permissive CORS, and gzip compression.

pub mod index;
pub mod ws;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Path of the WebSocket endpoint, also baked into the index page.
pub const WS_PATH: &str = "/ws";

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index::index))
        .route(WS_PATH, get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new().gzip(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
