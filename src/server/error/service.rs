//! Structured classification of persistence failures.
//!
//! Every service method returns `DbErr`s through [`ServiceError`], which decides once how a
//! failure is reported: the HTTP status of an API response, or the field and message of a
//! form submission.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client-facing message for timeouts, shared by API responses and form states.
pub const TIMEOUT_MESSAGE: &str = "The request timed out, please try again";

/// Prefix SQLite puts in front of the `table.column` list of a uniqueness violation.
const UNIQUE_MARKER: &str = "UNIQUE constraint failed: ";

/// Maps a uniqueness constraint to the form field and message reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictRule {
    /// Constraint target as reported by the database, `table.column`.
    pub target: &'static str,
    /// Form field the conflict is attributed to.
    pub field: &'static str,
    pub message: &'static str,
}

impl ConflictRule {
    pub const fn new(target: &'static str, field: &'static str, message: &'static str) -> Self {
        Self {
            target,
            field,
            message,
        }
    }
}

/// Kind of failure a service call ended in.
///
/// | Kind | Status | Client message |
/// |---|---|---|
/// | `Unavailable` | 503 | `"Database unavailable"` |
/// | `NotFound` | 404 | the message |
/// | `Validation` | 400 | the message |
/// | `Conflict` | 409 | the message |
/// | `Timeout` | 500 | [`TIMEOUT_MESSAGE`] |
/// | `Unknown` | 500 | `"Internal server error"` |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The database could not be reached or no connection could be acquired.
    #[error("Database unavailable")]
    Unavailable,

    #[error("{0}")]
    NotFound(String),

    /// Input rejected before or by the database.
    ///
    /// # Fields
    /// - `field` - Form field the message belongs to, `None` for whole-request errors
    /// - `message` - Message shown to the client
    #[error("{message}")]
    Validation {
        field: Option<String>,
        message: String,
    },

    /// A uniqueness constraint was violated.
    #[error("{message}")]
    Conflict {
        field: Option<String>,
        message: String,
    },

    /// The driver or pool gave up waiting.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// Anything else. The detail is logged, never shown to clients.
    #[error("Unexpected database error: {0}")]
    Unknown(String),
}

impl ServiceError {
    /// Classifies a SeaORM error, attributing uniqueness violations through `conflicts`.
    ///
    /// Violations whose target has no rule are attributed to the violated column.
    ///
    /// # Arguments
    /// - `err` - Error returned by a repository call
    /// - `conflicts` - Conflict rules of the calling service
    ///
    /// # Returns
    /// The `ServiceError` kind for the failure
    pub fn classify(err: DbErr, conflicts: &[ConflictRule]) -> Self {
        match &err {
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => return Self::Timeout,
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => return Self::Unavailable,
            DbErr::RecordNotFound(msg) => return Self::NotFound(msg.clone()),
            _ => {}
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Self::conflict(&msg, conflicts),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                return Self::Validation {
                    field: None,
                    message: "A referenced record does not exist".to_string(),
                }
            }
            _ => {}
        }

        let text = err.to_string();
        if text.contains(UNIQUE_MARKER) {
            return Self::conflict(&text, conflicts);
        }
        if is_timeout_message(&text) {
            return Self::Timeout;
        }

        Self::Unknown(text)
    }

    /// Shorthand for a validation error attributed to `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Form field the error belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::Conflict { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Timeout | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    pub fn client_message(&self) -> String {
        match self {
            Self::Unknown(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    fn conflict(message: &str, conflicts: &[ConflictRule]) -> Self {
        let Some(target) = unique_target(message) else {
            return Self::Conflict {
                field: None,
                message: "A record with these details already exists".to_string(),
            };
        };

        if let Some(rule) = conflicts.iter().find(|rule| rule.target == target) {
            return Self::Conflict {
                field: Some(rule.field.to_string()),
                message: rule.message.to_string(),
            };
        }

        let column = target.rsplit('.').next().unwrap_or(target);
        Self::Conflict {
            field: Some(column.to_string()),
            message: format!(
                "A record with this {} already exists",
                column.replace('_', " ")
            ),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        Self::classify(err, &[])
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            Self::Unknown(detail) => tracing::error!("{}", detail),
            Self::Unavailable | Self::Timeout => tracing::warn!("{}", self),
            _ => tracing::debug!("{}", self),
        }

        (
            self.status(),
            Json(ErrorDto {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}

/// Extracts the first `table.column` target from a uniqueness violation message.
fn unique_target(message: &str) -> Option<&str> {
    let start = message.find(UNIQUE_MARKER)? + UNIQUE_MARKER.len();
    let target = message[start..]
        .split(',')
        .next()?
        .trim()
        .trim_end_matches(|c: char| !c.is_alphanumeric() && c != '_');

    (!target.is_empty()).then_some(target)
}

fn is_timeout_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("timeout") || lower.contains("timed out") || message.contains("ETIMEOUT")
}
