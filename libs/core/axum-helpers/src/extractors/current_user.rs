//! Authenticated-caller extractor.

use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Header carrying the authenticated user's email, set by the fronting
/// auth layer (gateway or middleware) after it has verified credentials.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Extractor for the authenticated caller's identity.
///
/// Reads the email placed in [`USER_EMAIL_HEADER`] by the auth layer.
/// Requests without it are rejected with 401 before the handler runs.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::CurrentUser;
///
/// async fn whoami(CurrentUser(email): CurrentUser) -> String {
///     format!("Authenticated as {}", email)
/// }
/// ```
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(USER_EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        match email {
            Some(email) => Ok(CurrentUser(email.to_string())),
            None => {
                tracing::debug!("No {} header on request", USER_EMAIL_HEADER);
                Err(
                    AppError::Unauthorized("Missing authenticated user identity".to_string())
                        .into_response(),
                )
            }
        }
    }
}
