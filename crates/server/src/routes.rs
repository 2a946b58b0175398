use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use common::types::Health;

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Router serving the fixture tree under `/data` plus a health probe.
/// CORS is wide open: the fixtures are public static data and the portal
/// frontend may be hosted elsewhere during development.
pub fn build_router(fixture_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service("/data", ServeDir::new(fixture_dir))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
