//! Form submission endpoints.
//!
//! Actions back the HTML forms of the site. Each one reads the submitted strings, validates
//! them, checks the session, calls one service, and answers `200 OK` with a [`FormState`]
//! describing the outcome, so the form can be re-rendered with field-level messages.
//!
//! [`FormState`]: crate::model::form::FormState

pub mod auth;
pub mod catalog;
pub mod form;
pub mod notification;
pub mod profile;

#[cfg(test)]
mod test;

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    state::AppState,
};

/// Fields never echoed back into a form state.
pub const SECRET_FIELDS: &[&str] = &[
    "password",
    "confirm_password",
    "current_password",
    "new_password",
    "admin_code",
];

async fn require_admin(state: &AppState, session: &Session) -> Result<User, AppError> {
    AuthGuard::new(&state.db, session)
        .require(&[Permission::Admin])
        .await
}

async fn require_user(state: &AppState, session: &Session) -> Result<User, AppError> {
    AuthGuard::new(&state.db, session).require(&[]).await
}
