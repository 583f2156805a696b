use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::{Role, SessionUser, User},
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod gate;
mod guard;

fn session_user(id: i32, role: Role) -> SessionUser {
    SessionUser {
        id,
        email: format!("user{}@example.com", id),
        name: format!("User {}", id),
        role,
    }
}
