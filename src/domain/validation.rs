//! Field constraint predicates.
//!
//! Each check is a pure function returning `Result<(), ValidationError>` so
//! request shapes can run them before any storage call and collect the
//! failures into `ValidationErrors`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::config::{EMAIL_PATTERN, MIN_BOOK_YEAR, MIN_PASSWORD_LENGTH};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

fn failure(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Email must look like `local@domain.tld`.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(failure("email", "Email is wrong!"))
    }
}

/// Books older than [`MIN_BOOK_YEAR`] are rejected.
pub fn book_year(value: i32) -> Result<(), ValidationError> {
    if value >= MIN_BOOK_YEAR {
        Ok(())
    } else {
        Err(failure(
            "year",
            format!("Year must be {} or later", MIN_BOOK_YEAR),
        ))
    }
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(failure("password", "Password is required"))
    }
}

/// Accumulates predicate results per field.
#[derive(Debug)]
pub struct Checks {
    errors: ValidationErrors,
}

impl Default for Checks {
    fn default() -> Self {
        Self::new()
    }
}

impl Checks {
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Record the outcome of a predicate under `field`.
    pub fn check(mut self, field: &'static str, outcome: Result<(), ValidationError>) -> Self {
        if let Err(error) = outcome {
            self.errors.add(field, error);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
