//! Custom extractors: validated JSON bodies and integer path ids.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait
/// before any handler or service logic runs. On failure it returns a 400
/// envelope whose `data` is a field → message map.
///
/// # Example
/// ```ignore
/// async fn create_category(
///     ValidatedJson(payload): ValidatedJson<CategoryRequest>,
/// ) -> impl IntoResponse {
///     // payload passed all field constraints
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

/// Extractor for integer path ids.
///
/// Parses the `{id}` path segment as `i64` and returns an enveloped 400
/// response when it is not a valid integer.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match id.parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid id: {}", id)).into_response()),
        }
    }
}
