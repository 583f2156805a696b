use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, featured_artist::FeaturedArtistDto},
    server::{error::AppError, service::featured_artist::FeaturedArtistService, state::AppState},
};

/// Tag for grouping featured artist endpoints in OpenAPI documentation
pub static FEATURED_ARTIST_TAG: &str = "featured artist";

/// Get the published featured artists in display order.
#[utoipa::path(
    get,
    path = "/api/featured-artists",
    tag = FEATURED_ARTIST_TAG,
    responses(
        (status = 200, description = "Published featured artists by position", body = Vec<FeaturedArtistDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_featured_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let featured = FeaturedArtistService::new(&state.db).get_published().await?;

    let featured_dto: Vec<_> = featured.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(featured_dto)))
}
