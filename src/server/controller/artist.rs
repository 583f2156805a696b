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
        artist::{ArtistDto, ArtistInputDto, PaginatedArtistsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{artist::ArtistParams, page::PageRequest},
        service::artist::ArtistService,
        state::AppState,
    },
};

/// Tag for grouping artist endpoints in OpenAPI documentation
pub static ARTIST_TAG: &str = "artist";

/// Get a page of artists ordered by name.
#[utoipa::path(
    get,
    path = "/api/artists",
    tag = ARTIST_TAG,
    params(ListQueryDto),
    responses(
        (status = 200, description = "Page of artists", body = PaginatedArtistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_artists(
    State(state): State<AppState>,
    Query(query): Query<ListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let artists = ArtistService::new(&state.db)
        .get_paginated(PageRequest::from_query(query))
        .await?;

    Ok((StatusCode::OK, Json(artists.into_dto())))
}

/// Create an artist.
///
/// # Access Control
/// - `Admin` - Only admins can create artists
///
/// # Returns
/// - `201 Created` - The created artist
/// - `400 Bad Request` - Missing or invalid field
/// - `409 Conflict` - An artist with this name already exists
#[utoipa::path(
    post,
    path = "/api/artists",
    tag = ARTIST_TAG,
    request_body = ArtistInputDto,
    responses(
        (status = 201, description = "Successfully created artist", body = ArtistDto),
        (status = 400, description = "Invalid artist data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Artist name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artist(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ArtistInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ArtistParams::try_from_dto(payload)?;
    let artist = ArtistService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(artist.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/artists/{id}",
    tag = ARTIST_TAG,
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist", body = ArtistDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let artist = ArtistService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(artist.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/artists/{id}",
    tag = ARTIST_TAG,
    params(("id" = i32, Path, description = "Artist ID")),
    request_body = ArtistInputDto,
    responses(
        (status = 200, description = "Successfully updated artist", body = ArtistDto),
        (status = 400, description = "Invalid artist data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 409, description = "Artist name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_artist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ArtistInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ArtistParams::try_from_dto(payload)?;
    let artist = ArtistService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(artist.into_dto())))
}

/// Delete an artist, removing their release credits, group memberships, and feature.
#[utoipa::path(
    delete,
    path = "/api/artists/{id}",
    tag = ARTIST_TAG,
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 204, description = "Successfully deleted artist"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ArtistService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
