//! Type-safe session management wrappers.
//!
//! The signed session cookie carries a snapshot of the signed-in user. Route gating reads
//! the snapshot directly, handlers that act on the user reload it through `AuthGuard`.

use tower_sessions::Session;

use crate::server::{error::AppError, model::user::SessionUser};

const SESSION_AUTH_USER: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the signed-in user and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in user, issuing a new session ID first.
    ///
    /// Cycling the ID on sign-in prevents session fixation.
    ///
    /// # Returns
    /// - `Ok(())` - User stored in the session
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the signed-in user.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - A user is signed in
    /// - `Ok(None)` - No user in session (not signed in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.session.get::<SessionUser>(SESSION_AUTH_USER).await?)
    }

    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.get_user().await?.map(|user| user.id))
    }

    /// Deletes the session and its data, used on sign-out.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
