use std::path::Path;

use axum::{Router, http::StatusCode, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Router serving `dist_dir`, with `/health` and SPA fallback.
pub fn build_app(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let assets = ServeDir::new(dist_dir).fallback(index);

    Router::new()
        .route("/health", get(health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
