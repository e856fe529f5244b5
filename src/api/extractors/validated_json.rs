//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor that validates the payload before the handler runs.
///
/// Both undeserializable bodies and failed field validation surface as
/// `AppError::Validation` (HTTP 400).
///
/// # Example
///
/// ```rust,ignore
/// use profile_api::api::extractors::ValidatedJson;
/// use profile_api::domain::UserDto;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserDto>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        if let Err(errors) = value.validate() {
            return Err(AppError::validation(format_validation_errors(&errors)));
        }

        Ok(ValidatedJson(value))
    }
}

/// Flatten field errors into one user-facing message
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, errs) in errors.field_errors() {
        for err in errs {
            match &err.message {
                Some(m) => messages.push(m.to_string()),
                None => messages.push(format!("{} is invalid", field)),
            }
        }
    }
    messages.join(", ")
}
