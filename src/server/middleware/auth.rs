use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

pub enum Permission {
    Admin,
}

impl Permission {
    /// Permissions needed to act with `role`.
    pub fn for_role(role: Role) -> &'static [Permission] {
        match role {
            Role::Admin => &[Permission::Admin],
            Role::User => &[],
        }
    }
}

/// Resolves the signed-in user and checks their permissions.
///
/// The user is reloaded from the database so role changes and deleted accounts take
/// effect without waiting for the session to expire.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Gets the signed-in user if they hold every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Signed in with the required permissions
    /// - `Err(AuthError::UserNotInSession)` - Not signed in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
