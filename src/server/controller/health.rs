use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::ErrorDto,
        health::{CdnStatusDto, HealthDto},
    },
    server::{
        error::AppError,
        model::user::User,
        service::{cdn::CdnService, health::HealthService},
        state::AppState,
    },
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Check that the server can reach its database.
///
/// # Returns
/// - `200 OK` - Database connected, with the ping latency in milliseconds
/// - `503 Service Unavailable` - Database unreachable, with detail in development only
#[utoipa::path(
    get,
    path = "/api/health",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Database connected", body = HealthDto),
        (status = 503, description = "Database disconnected", body = HealthDto)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::new(&state.db, state.environment)
        .check()
        .await;

    let status = if health.database == "connected" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health))
}

/// Report the state of the latest CDN invalidation.
#[utoipa::path(
    get,
    path = "/api/cdn-status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "CDN invalidation state", body = CdnStatusDto)
    ),
)]
pub async fn get_cdn_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = CdnService::new(&state.http_client, &state.cdn)
        .status()
        .await;

    (StatusCode::OK, Json(status))
}

/// Invalidate every cached path on the CDN.
///
/// # Access Control
/// - `Admin` - Enforced by the admin router
///
/// # Returns
/// - `202 Accepted` - Invalidation created, reported as `invalidating`
/// - `502 Bad Gateway` - The CDN API rejected the request or is not configured
#[utoipa::path(
    post,
    path = "/api/admin/cdn/invalidate",
    tag = STATUS_TAG,
    responses(
        (status = 202, description = "Invalidation created", body = CdnStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 502, description = "CDN request failed", body = ErrorDto)
    ),
)]
pub async fn invalidate_cdn(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let invalidation = CdnService::new(&state.http_client, &state.cdn)
        .invalidate()
        .await?;

    tracing::info!("User {} invalidated the CDN cache", user.id);

    Ok((StatusCode::ACCEPTED, Json(invalidation.into_dto())))
}
