use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListQueryDto},
        user::{PaginatedUsersDto, UpdateRoleDto, UserDto},
    },
    server::{
        error::AppError,
        model::{page::PageRequest, user::User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the signed-in user's profile.
///
/// # Access Control
/// - Any signed-in user, enforced by the private router
#[utoipa::path(
    get,
    path = "/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_profile(Extension(user): Extension<User>) -> impl IntoResponse {
    (StatusCode::OK, Json(user.into_dto()))
}

/// Get a page of users, optionally searching by name or email.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(ListQueryDto),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .get_paginated(PageRequest::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Change a user's role.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Unknown role, or an admin removing their own admin role
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid role change", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(actor): Extension<User>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .set_role(actor.id, id, &payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
