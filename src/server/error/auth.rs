use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is stored in the session.
    ///
    /// The request was made without signing in, or the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an account is removed while a session for it is still live.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the role required for the operation.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Server-side description of what was attempted
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Email and password did not match a user.
    ///
    /// Unknown emails and wrong passwords share this variant so the response does not
    /// reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Unauthorized"
/// - `AccessDenied` → 403 Forbidden with "Forbidden"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
