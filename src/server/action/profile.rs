use axum::{extract::State, Form, Json};
use tower_sessions::Session;

use crate::{
    model::{
        form::FormState,
        user::{ChangePasswordDto, UpdateProfileDto},
    },
    server::{
        action::{require_user, SECRET_FIELDS},
        error::AppError,
        middleware::session::AuthSession,
        service::user::UserService,
        state::AppState,
        util::form::FormInput,
    },
};

const PROFILE_CONFLICTS: &[(&str, &str)] =
    &[("email", "This email is already used by another account")];

/// Updates the signed-in user's name and email.
///
/// The session snapshot is refreshed so the new name shows up immediately. Unlike other
/// actions the submitted values are kept on success.
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let fields = input.echo(SECRET_FIELDS);
    let mut form = FormState::with_fields(fields.clone());

    let dto = UpdateProfileDto {
        name: input.text("name"),
        email: input.text("email"),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = apply_profile_update(&state, &session, dto).await;

    let mut form = form.resolve(result, PROFILE_CONFLICTS);
    if form.success {
        form.fields = fields;
    }
    Json(form)
}

async fn apply_profile_update(
    state: &AppState,
    session: &Session,
    dto: UpdateProfileDto,
) -> Result<(), AppError> {
    let user = require_user(state, session).await?;
    let user = UserService::new(&state.db)
        .update_profile(user.id, dto)
        .await?;

    AuthSession::new(session)
        .set_user(&user.to_session_user())
        .await
}

/// Changes the signed-in user's password.
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(SECRET_FIELDS));

    let dto = ChangePasswordDto {
        current_password: input.secret("current_password"),
        new_password: input.secret("new_password"),
        confirm_password: input.secret("confirm_password"),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = replace_password(&state, &session, dto).await;

    Json(form.resolve(result, &[]))
}

async fn replace_password(
    state: &AppState,
    session: &Session,
    dto: ChangePasswordDto,
) -> Result<(), AppError> {
    let user = require_user(state, session).await?;

    UserService::new(&state.db)
        .change_password(user.id, dto)
        .await
}
