use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ListQueryDto},
        group::{GroupDto, GroupInputDto, PaginatedGroupsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{group::GroupParams, page::PageRequest},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Get a page of groups ordered by name, each with its member artists.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    params(ListQueryDto),
    responses(
        (status = 200, description = "Page of groups", body = PaginatedGroupsDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db)
        .get_paginated(PageRequest::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(groups.into_dto())))
}

/// Create a group with its members.
///
/// # Access Control
/// - `Admin` - Only admins can create groups
///
/// # Returns
/// - `201 Created` - The created group
/// - `400 Bad Request` - Missing or invalid field, or a member artist does not exist
/// - `409 Conflict` - A group with this name already exists
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = GroupInputDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Group name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GroupInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = GroupParams::try_from_dto(payload)?;
    let group = GroupService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group with its members", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = GroupInputDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Group name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<GroupInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = GroupParams::try_from_dto(payload)?;
    let group = GroupService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group. Member artists are kept.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Successfully deleted group"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    GroupService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
