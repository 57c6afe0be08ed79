//! Shared axum building blocks for the registry services.
//!
//! Provides the pieces every HTTP crate in the workspace needs:
//! - structured error responses ([`AppError`], [`ErrorResponse`], [`ErrorCode`])
//! - request extractors ([`ValidatedJson`], [`UuidPath`], [`CurrentUser`])
//! - a liveness endpoint ([`health::router`])
//! - a graceful-shutdown future ([`shutdown::shutdown_signal`])

pub mod errors;
pub mod extractors;
pub mod health;
pub mod shutdown;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{CurrentUser, UuidPath, ValidatedJson};
