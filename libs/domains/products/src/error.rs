use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(Uuid),

    /// Update aimed at a product id that does not exist. The original
    /// endpoint answered this with a plain bad-request message, and
    /// callers depend on that wording.
    #[error("Product not found")]
    UpdateTarget(Uuid),

    #[error("Producer {0} not found")]
    ProducerNotFound(Uuid),

    #[error("Product with name '{0}' already exists for this producer")]
    DuplicateName(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User '{user}' does not own producer {producer_id}")]
    NotOwner { user: String, producer_id: Uuid },

    #[error("Image storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::UpdateTarget(_) => AppError::BadRequest("Product not found".to_string()),
            ProductError::ProducerNotFound(id) => {
                AppError::NotFound(format!("Producer {} not found", id))
            }
            ProductError::DuplicateName(name) => {
                AppError::Conflict(format!("Product with name '{}' already exists", name))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::NotOwner { producer_id, .. } => {
                AppError::Forbidden(format!("Access denied to producer {}", producer_id))
            }
            ProductError::Storage(msg) => AppError::InternalServerError(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
