//! Liveness endpoint shared by the workspace binaries.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Create a router exposing `GET /healthz`.
///
/// Reports the service name and version so deployments can verify which
/// build is live. Readiness checks against external dependencies belong to
/// the binary that owns those dependencies.
pub fn router(service: &'static str, version: &'static str) -> Router {
    Router::new().route(
        "/healthz",
        get(move || async move {
            Json(HealthResponse {
                status: "ok".to_string(),
                service: service.to_string(),
                version: version.to_string(),
            })
        }),
    )
}
