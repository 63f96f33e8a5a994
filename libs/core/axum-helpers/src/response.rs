//! Uniform response envelope applied to every API response.

use serde::{Deserialize, Serialize};

/// The `{code, message, data}` wrapper returned by every endpoint.
///
/// `code` mirrors the HTTP status of the response, `message` is a
/// human-readable status string, and `data` carries the payload (`null` for
/// operations with nothing to return, e.g. delete).
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 200,
///   "message": "Success",
///   "data": { "id": 1, "name": "Noodles", "displayOrder": 0 }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Mirrors the HTTP status code of the response
    pub code: i32,
    /// Human-readable status message
    pub message: String,
    /// Response payload, `null` when there is nothing to return
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope with the default status message.
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// 200 envelope with an operation-specific message.
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 201 envelope for newly created resources.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 201,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Error envelope with no payload.
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Error envelope carrying structured detail (e.g. a field → message map).
    pub fn error_with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serializes_data() {
        let envelope = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["message"], "Success");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_unit_data_serializes_as_null() {
        let envelope = ApiResponse::success_with_message("Deleted", ());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 200);
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_error_envelope_has_null_data() {
        let envelope = ApiResponse::error(404, "Category not found with id: 9");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "Category not found with id: 9");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_created_envelope_code() {
        let envelope = ApiResponse::created("Created", 42);
        assert_eq!(envelope.code, 201);
        assert_eq!(envelope.data, Some(42));
    }
}
