//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Every variant renders as
//! `{"message", "detail"?, "errors"?}` with the matching status code.

use std::collections::BTreeMap;
use std::fmt::Display;

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{MSG_INTERNAL, MSG_INVALID, MSG_SEVERAL};

/// Field name -> validation message.
pub type FieldErrors = BTreeMap<String, String>;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Request errors
    #[error("{message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    #[error("{}", MSG_SEVERAL)]
    Form(FieldErrors),

    // Authentication & Authorization
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Internal
    #[error("{}: {detail}", MSG_INTERNAL)]
    Internal { detail: String },
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::Form(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message, .. } => message,
            AppError::Form(_) => MSG_SEVERAL,
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg,
            AppError::Internal { .. } => MSG_INTERNAL,
        }
    }

    /// Underlying cause text, when one was captured
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::BadRequest { detail, .. } => detail.as_deref(),
            AppError::Internal { detail } => Some(detail),
            _ => None,
        }
    }

    /// Per-field validation messages of a form error
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Form(errors) => Some(errors),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { detail } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status();
        let body = ErrorBody {
            message: self.message(),
            detail: self.detail(),
            errors: self.field_errors(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    /// Internal failure with a fixed message; `cause` becomes the detail.
    pub fn internal(cause: impl Display) -> Self {
        AppError::Internal {
            detail: cause.to_string(),
        }
    }

    /// Malformed request with a fixed message; `cause` becomes the detail.
    pub fn generic_bad_request(cause: impl Display) -> Self {
        AppError::BadRequest {
            message: MSG_INVALID.to_string(),
            detail: Some(cause.to_string()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            detail: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn form(errors: FieldErrors) -> Self {
        AppError::Form(errors)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::Forbidden(message.into())
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::internal(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::internal(err)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::generic_bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::generic_bad_request(rejection.body_text())
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::internal(err)
    }
}
