use axum::{
    extract::{Multipart, State},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{form::FormState, notification::NotificationInputDto},
    server::{
        action::require_admin,
        error::AppError,
        model::notification::NotificationParams,
        service::notification::NotificationService,
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Creates a banner from the multipart banner form, rendering the optional image.
pub async fn create_notification(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Json<FormState> {
    let upload = match MultipartForm::read(multipart).await {
        Ok(upload) => upload,
        Err(err) => {
            let mut form = FormState::default();
            form.apply_error(err, &[]);
            return Json(form);
        }
    };

    let mut form = FormState::with_fields(upload.fields.echo(&[]));
    let dto = upload.notification_input();

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = save_notification(&state, &session, dto, upload.image).await;

    Json(form.resolve(result, &[]))
}

async fn save_notification(
    state: &AppState,
    session: &Session,
    dto: NotificationInputDto,
    image: Option<Vec<u8>>,
) -> Result<(), AppError> {
    let mut params = NotificationParams::try_from_dto(dto, None)?;
    let user = require_admin(state, session).await?;
    params.created_by = Some(user.id);

    NotificationService::new(&state.db, &state.overlay, &state.upload_dir)
        .create(params, image)
        .await?;

    Ok(())
}
