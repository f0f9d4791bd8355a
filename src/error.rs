//! Error types for the catalog server

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Machine-readable error codes returned in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    DbFailure = 3,
    NoSuchRecord = 4,
    BadValue = 5,
    HasDependents = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid fields: {0}")]
    InvalidFields(#[from] ValidationErrors),

    /// A submitted value that could not be read into its field
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            match db.code().as_deref() {
                // foreign_key_violation
                Some("23503") => {
                    return AppError::Validation(
                        "Referenced record does not exist or is still in use".to_string(),
                    );
                }
                // check_violation
                Some("23514") => {
                    return AppError::Validation(db.message().to_string());
                }
                _ => {}
            }
        }
        AppError::Database(e)
    }
}

impl AppError {
    /// Map an error raised by a `DELETE`: a foreign key violation there means
    /// the row is still referenced.
    pub fn on_delete(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            if db.code().as_deref() == Some("23503") {
                return AppError::Conflict(
                    "Record is still referenced by other records".to_string(),
                );
            }
        }
        AppError::from(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // the inner error reads `<field path>: <reason> at line L column C`
            JsonRejection::JsonDataError(err) => {
                let detail = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                let detail = match detail.rsplit_once(" at line ") {
                    Some((head, _)) => head.to_string(),
                    None => detail,
                };
                match detail.split_once(": ") {
                    Some((field, reason)) if !field.contains(' ') => AppError::InvalidValue {
                        field: field.to_string(),
                        message: format!("Invalid value: {}", reason),
                    },
                    _ => AppError::Validation(err.body_text()),
                }
            }
            other => AppError::Validation(other.body_text()),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Field-level messages for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

/// Flatten validator output into `field -> [messages]`
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields = None;
        let (status, code, message) = match &self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchRecord, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::InvalidFields(errors) => {
                fields = Some(field_messages(errors));
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::BadValue,
                    "One or more fields are invalid".to_string(),
                )
            }
            AppError::InvalidValue { field, message } => {
                fields = Some(BTreeMap::from([(field.clone(), vec![message.clone()])]));
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::BadValue,
                    "One or more fields are invalid".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::HasDependents, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            fields,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
