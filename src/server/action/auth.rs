use axum::{extract::State, Form, Json};
use tower_sessions::Session;

use crate::{
    model::{
        form::FormState,
        user::{SignInDto, SignUpDto},
    },
    server::{
        action::SECRET_FIELDS,
        error::AppError,
        middleware::session::AuthSession,
        model::user::User,
        service::auth::AuthService,
        state::AppState,
        util::form::FormInput,
    },
};

const SIGN_UP_CONFLICTS: &[(&str, &str)] = &[(
    "email",
    "An account with this email already exists, try signing in instead",
)];

/// Creates an account from the sign-up form and signs it in.
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(SECRET_FIELDS));

    let dto = SignUpDto {
        email: input.text("email"),
        name: input.text("name"),
        password: input.secret("password"),
        confirm_password: input.secret("confirm_password"),
        admin_code: input.text("admin_code"),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = register(&state, &session, dto).await;

    Json(form.resolve(result, SIGN_UP_CONFLICTS))
}

/// Signs in from the sign-in form.
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Json<FormState> {
    let mut form = FormState::with_fields(input.echo(SECRET_FIELDS));

    let dto = SignInDto {
        email: input.text("email"),
        password: input.secret("password"),
    };

    form.validate(&dto);
    if form.has_errors() {
        return Json(form);
    }

    let result = authenticate(&state, &session, dto).await;

    Json(form.resolve(result, &[]))
}

async fn register(state: &AppState, session: &Session, dto: SignUpDto) -> Result<(), AppError> {
    let user = AuthService::new(&state.db, &state.admin_code_service)
        .sign_up(dto)
        .await?;

    start_session(session, &user).await
}

async fn authenticate(state: &AppState, session: &Session, dto: SignInDto) -> Result<(), AppError> {
    let user = AuthService::new(&state.db, &state.admin_code_service)
        .sign_in(dto)
        .await?;

    start_session(session, &user).await
}

async fn start_session(session: &Session, user: &User) -> Result<(), AppError> {
    AuthSession::new(session)
        .set_user(&user.to_session_user())
        .await
}
