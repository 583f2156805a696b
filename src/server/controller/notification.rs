use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{api::ErrorDto, notification::NotificationDto},
    server::{
        error::AppError,
        model::{notification::NotificationParams, user::User},
        service::notification::NotificationService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping notification banner endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the active notification banner.
///
/// # Returns
/// - `200 OK` - The active banner, or `null` when none is active
#[utoipa::path(
    get,
    path = "/api/notifications/active",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Active banner or null", body = Option<NotificationDto>),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_active_notification(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let notification = service(&state).get_active().await?;

    Ok((StatusCode::OK, Json(notification.map(|n| n.into_dto()))))
}

/// Get every banner, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All banners", body = Vec<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let notifications = service(&state).get_all().await?;

    let notifications_dto: Vec<_> = notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// Create a banner from a multipart form.
///
/// Text parts are `message`, `secondary_message`, `link`, and `active`. An optional
/// `image` part is cropped to a banner, overlaid with the message, and stored as JPEG.
/// Creating an active banner deactivates the others.
///
/// # Returns
/// - `201 Created` - The created banner
/// - `400 Bad Request` - Invalid field or unreadable image
#[utoipa::path(
    post,
    path = "/api/admin/notifications",
    tag = NOTIFICATION_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created banner", body = NotificationDto),
        (status = 400, description = "Invalid banner data or image", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = MultipartForm::read(multipart).await?;

    let params = NotificationParams::try_from_dto(form.notification_input(), Some(user.id))?;
    let notification = service(&state).create(params, form.image).await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Delete a banner and its stored image.
#[utoipa::path(
    delete,
    path = "/api/admin/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted banner"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    service(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn service(state: &AppState) -> NotificationService<'_> {
    NotificationService::new(&state.db, &state.overlay, &state.upload_dir)
}
