use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuItemError {
    #[error("Menu item not found with id: {0}")]
    NotFound(i64),

    #[error("Category not found with id: {0}")]
    CategoryNotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type MenuItemResult<T> = Result<T, MenuItemError>;

impl From<MenuItemError> for AppError {
    fn from(err: MenuItemError) -> Self {
        match err {
            MenuItemError::NotFound(id) => {
                AppError::NotFound(format!("Menu item not found with id: {}", id))
            }
            MenuItemError::CategoryNotFound(id) => {
                AppError::NotFound(format!("Category not found with id: {}", id))
            }
            MenuItemError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for MenuItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
