//! Application error type translated into enveloped HTTP responses.

use crate::response::ApiResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

/// Application error type that converts to the `{code, message, data}`
/// envelope.
///
/// Database failures and internal errors are logged server-side with full
/// detail; the caller only ever sees a generic 500 message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Request validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_field_map(&errors))
    }
}

/// Flattens validator output to a field → message map, keeping the first
/// message per field.
pub fn validation_field_map(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Invalid value for field '{}'", field));
            (field.to_string(), message)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(500, "Internal server error"),
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction error: {:?}", e);
                let status = e.status();
                (
                    status,
                    ApiResponse::error(status.as_u16() as i32, e.body_text()),
                )
            }
            AppError::Validation(fields) => {
                tracing::info!("Validation error: {:?}", fields);
                (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::error_with_data(
                        400,
                        "Invalid request data",
                        serde_json::to_value(fields).unwrap_or(serde_json::Value::Null),
                    ),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ApiResponse::error(400, msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ApiResponse::error(404, msg))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::error(500, "Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for routes that match nothing.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(404, "Resource not found")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_envelope() {
        let response = AppError::NotFound("Category not found with id: 7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "Category not found with id: 7");
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let response = AppError::BadRequest("Category 'Pho' already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], 400);
        assert_eq!(json["message"], "Category 'Pho' already exists");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = AppError::Internal("connection pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal server error");
        assert!(!json["message"].as_str().unwrap().contains("pool"));
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_map() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Name must not be blank".to_string());
        let response = AppError::Validation(fields).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], 400);
        assert_eq!(json["data"]["name"], "Name must not be blank");
    }
}
