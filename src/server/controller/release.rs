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
        release::{PaginatedReleasesDto, ReleaseDto, ReleaseInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{page::PageRequest, release::ReleaseParams},
        service::release::ReleaseService,
        state::AppState,
    },
};

/// Tag for grouping release endpoints in OpenAPI documentation
pub static RELEASE_TAG: &str = "release";

/// Get a page of releases.
///
/// Releases are ordered by release date, newest first, and can be filtered by a
/// case-insensitive search on the title.
///
/// # Returns
/// - `200 OK` - Releases with the total count and whether more pages exist
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/api/releases",
    tag = RELEASE_TAG,
    params(ListQueryDto),
    responses(
        (status = 200, description = "Page of releases", body = PaginatedReleasesDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_releases(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let releases = ReleaseService::new(&state.db)
        .get_paginated(PageRequest::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(releases.into_dto())))
}

/// Create a release.
///
/// # Access Control
/// - `Admin` - Only admins can create releases
///
/// # Returns
/// - `201 Created` - The created release with its artists
/// - `400 Bad Request` - Missing or invalid field, the message names the first one
/// - `409 Conflict` - Catalog number already in use
#[utoipa::path(
    post,
    path = "/api/releases",
    tag = RELEASE_TAG,
    request_body = ReleaseInputDto,
    responses(
        (status = 201, description = "Successfully created release", body = ReleaseDto),
        (status = 400, description = "Invalid release data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Catalog number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_release(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ReleaseInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ReleaseParams::try_from_dto(payload)?;
    let release = ReleaseService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(release.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/releases/{id}",
    tag = RELEASE_TAG,
    params(("id" = i32, Path, description = "Release ID")),
    responses(
        (status = 200, description = "Release with its artists", body = ReleaseDto),
        (status = 404, description = "Release not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_release(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let release = ReleaseService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(release.into_dto())))
}

/// Replace a release's fields and artist credits.
///
/// # Access Control
/// - `Admin` - Only admins can update releases
#[utoipa::path(
    put,
    path = "/api/releases/{id}",
    tag = RELEASE_TAG,
    params(("id" = i32, Path, description = "Release ID")),
    request_body = ReleaseInputDto,
    responses(
        (status = 200, description = "Successfully updated release", body = ReleaseDto),
        (status = 400, description = "Invalid release data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Release not found", body = ErrorDto),
        (status = 409, description = "Catalog number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_release(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReleaseInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ReleaseParams::try_from_dto(payload)?;
    let release = ReleaseService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(release.into_dto())))
}

/// Delete a release. Its tracks are kept without a release.
///
/// # Access Control
/// - `Admin` - Only admins can delete releases
#[utoipa::path(
    delete,
    path = "/api/releases/{id}",
    tag = RELEASE_TAG,
    params(("id" = i32, Path, description = "Release ID")),
    responses(
        (status = 204, description = "Successfully deleted release"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Release not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_release(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ReleaseService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
