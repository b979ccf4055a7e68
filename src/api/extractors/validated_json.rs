//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, AppResult, FieldErrors};

/// Validated JSON extractor that automatically validates requests.
///
/// The body is decoded regardless of `Content-Type`. An empty body decodes
/// as `{}` so that missing fields surface as validation errors. Malformed
/// JSON becomes a generic bad request with the decoder message as detail;
/// validation failures become a form error listing every failing field.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use planets_api::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct CreatePlanetRequest {
///     #[validate(required(message = "Name field is empty or missing."))]
///     name: Option<String>,
/// }
///
/// async fn create_planet(ValidatedJson(payload): ValidatedJson<CreatePlanetRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::generic_bad_request(e.body_text()))?;

        let value = decode::<T>(&body)?;

        value
            .validate()
            .map_err(|e| AppError::form(collect_field_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };

    serde_json::from_slice(body).map_err(AppError::generic_bad_request)
}

/// One message per failing field, the first one the validator reported.
fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            (field.to_string(), message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(required(message = "Label field is empty or missing."))]
        label: Option<String>,
    }

    #[test]
    fn test_blank_body_decodes_as_empty_object() {
        let sample: Sample = decode(b"  \n").unwrap();
        assert!(sample.label.is_none());
    }

    #[test]
    fn test_malformed_body_is_generic_bad_request() {
        let err = decode::<Sample>(b"INVALID JSON").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert!(!err.detail().unwrap_or_default().is_empty());
    }

    #[test]
    fn test_field_errors_use_validator_messages() {
        let sample = Sample { label: None };
        let errors = sample.validate().unwrap_err();
        let fields = collect_field_errors(&errors);

        assert_eq!(
            fields.get("label").map(String::as_str),
            Some("Label field is empty or missing.")
        );
    }
}
