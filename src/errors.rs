//! Centralized error handling.
//!
//! Every fallible path returns [`AppResult`]. Handlers rely on the
//! `IntoResponse` impl below for the wire form, so services never build
//! HTTP responses themselves.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown seller or book id. Rendered as a bare 404.
    #[error("Resource not found")]
    NotFound,

    /// Rejected input, including malformed JSON and unknown seller references.
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// HTTP status paired with the machine-readable code.
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    /// Message safe to show a client. Server-side failures are logged here
    /// and replaced with a generic sentence.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(detail = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        if matches!(self, AppError::NotFound) {
            return status.into_response();
        }

        let envelope = ErrorEnvelope {
            error: ErrorBody {
                code,
                message: self.public_message(),
            },
        };

        (status, Json(envelope)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Turns a missing row into [`AppError::NotFound`].
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
