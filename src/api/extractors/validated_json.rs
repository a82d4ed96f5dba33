//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has already passed its `Validate` checks.
///
/// Both malformed JSON and failed field constraints are rejected with
/// `AppError::Validation` (422) before the handler body runs.
///
/// ```rust,ignore
/// async fn create_seller(ValidatedJson(payload): ValidatedJson<CreateSellerRequest>) {
///     // payload.email already matches the email pattern
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

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use validator::{ValidationError, ValidationErrors};

    use super::*;

    #[test]
    fn test_format_uses_messages_in_field_order() {
        let mut errors = ValidationErrors::new();
        let mut year = ValidationError::new("year");
        year.message = Some("Year must be 2020 or later".into());
        errors.add("year", year);
        errors.add("email", ValidationError::new("email"));

        assert_eq!(
            format_validation_errors(&errors),
            "email is invalid, Year must be 2020 or later"
        );
    }
}
