use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{admin::DashboardDto, api::ErrorDto},
    server::{error::AppError, service::admin::dashboard::DashboardService, state::AppState},
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get the catalog and account totals for the admin dashboard.
#[utoipa::path(
    get,
    path = "/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard totals", body = DashboardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let counts = DashboardService::new(&state.db).counts().await?;

    Ok((StatusCode::OK, Json(counts)))
}
