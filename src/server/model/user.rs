//! User domain models and parameters.
//!
//! Users authenticate with email and password. The role decides access to admin routes
//! and is carried into the session at sign-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::{PaginatedUsersDto, SessionUserDto, UserDto};
use crate::server::model::page::Page;

/// Access level of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Parses a stored or submitted role, `None` for anything other than `admin`/`user`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// User account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Unrecognized stored roles are treated as `Role::User`, never as admin.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: Role::parse(&entity.role).unwrap_or(Role::User),
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Snapshot of the user stored in the session at sign-in.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

impl Page<User> {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let has_more = self.has_more();
        PaginatedUsersDto {
            users: self.items.into_iter().map(User::into_dto).collect(),
            count: self.count,
            has_more,
        }
    }
}

/// The signed-in user as serialized into the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> SessionUserDto {
        SessionUserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Parameters for creating an account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}
