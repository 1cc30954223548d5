//! Health check HTTP route handlers
//!
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/live` - Liveness probe with version info

use axum::{response::IntoResponse, routing::get, Json, Router};

/// Create the health check router
pub fn health_router() -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
}

/// Simple health check for load balancers
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe returning status and version
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
