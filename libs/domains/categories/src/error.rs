use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found with id: {0}")]
    NotFound(i64),

    #[error("Category with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

/// Convert CategoryError to AppError for enveloped error responses.
///
/// Duplicate names surface as 400 rather than 409; conflicts share the
/// bad-request status with validation failures.
impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(id) => {
                AppError::NotFound(format!("Category not found with id: {}", id))
            }
            CategoryError::DuplicateName(name) => {
                AppError::BadRequest(format!("Category with name '{}' already exists", name))
            }
            CategoryError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
