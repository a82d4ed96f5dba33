//! Path extractor whose rejections follow the API error contract.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Path parameters parsed into `T`.
///
/// An id that is not a number, or overflows `i32`, is rejected with
/// `AppError::Validation` (422) instead of axum's plain-text 400.
///
/// ```rust,ignore
/// async fn get_book(ValidatedPath(id): ValidatedPath<i32>) {
///     // id is a valid i32
/// }
/// ```
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| AppError::validation(e.body_text()))?;

        Ok(ValidatedPath(value))
    }
}
