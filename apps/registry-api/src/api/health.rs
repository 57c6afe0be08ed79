//! Health check endpoint

use axum::Router;

/// Create the liveness router
pub fn router() -> Router {
    axum_helpers::health::router(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
