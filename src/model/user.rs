use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub count: u64,
    pub has_more: bool,
}

/// The signed-in user as stored in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_empty")]
    #[validate(
        required(message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_empty")]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: Option<String>,
    /// One-time code granting the admin role when no admin exists yet.
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    pub admin_code: Option<String>,
}

impl SignUpDto {
    pub const FIELDS: &'static [&'static str] =
        &["email", "name", "password", "confirm_password"];
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(required(message = "Email is required"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_empty")]
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

impl SignInDto {
    pub const FIELDS: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: Option<String>,
}

impl UpdateProfileDto {
    pub const FIELDS: &'static [&'static str] = &["name", "email"];
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    #[serde(default, deserialize_with = "crate::model::non_empty")]
    #[validate(required(message = "Current password is required"))]
    pub current_password: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_empty")]
    #[validate(
        required(message = "New password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub new_password: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_empty")]
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: Option<String>,
}

impl ChangePasswordDto {
    pub const FIELDS: &'static [&'static str] =
        &["current_password", "new_password", "confirm_password"];
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    /// Either `"admin"` or `"user"`.
    pub role: String,
}
