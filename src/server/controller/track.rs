use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, TrackListQueryDto},
        track::{PaginatedTracksDto, TrackDto, TrackInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{page::PageRequest, track::TrackParams},
        service::track::TrackService,
        state::AppState,
    },
};

/// Tag for grouping track endpoints in OpenAPI documentation
pub static TRACK_TAG: &str = "track";

/// Get a page of tracks.
///
/// With `releaseId` only that release's tracks are returned, in track order.
#[utoipa::path(
    get,
    path = "/api/tracks",
    tag = TRACK_TAG,
    params(TrackListQueryDto),
    responses(
        (status = 200, description = "Page of tracks", body = PaginatedTracksDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_tracks(
    State(state): State<AppState>,
    Query(query): Query<TrackListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_track_query(&query);
    let tracks = TrackService::new(&state.db)
        .get_paginated(page, query.release_id)
        .await?;

    Ok((StatusCode::OK, Json(tracks.into_dto())))
}

/// Create a track, optionally placed on a release.
///
/// # Access Control
/// - `Admin` - Only admins can create tracks
///
/// # Returns
/// - `201 Created` - The created track
/// - `400 Bad Request` - Missing or invalid field, or the release does not exist
#[utoipa::path(
    post,
    path = "/api/tracks",
    tag = TRACK_TAG,
    request_body = TrackInputDto,
    responses(
        (status = 201, description = "Successfully created track", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_track(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TrackInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = TrackParams::try_from_dto(payload)?;
    let track = TrackService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(track.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    responses(
        (status = 200, description = "Track", body = TrackDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let track = TrackService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(track.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    request_body = TrackInputDto,
    responses(
        (status = 200, description = "Successfully updated track", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_track(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TrackInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = TrackParams::try_from_dto(payload)?;
    let track = TrackService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(track.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    responses(
        (status = 204, description = "Successfully deleted track"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_track(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TrackService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
