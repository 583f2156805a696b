use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{SessionUserDto, SignInDto, SignUpDto},
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create an account and sign it in.
///
/// Supplying the admin code logged at startup creates the account as an admin.
///
/// # Returns
/// - `201 Created` - The signed-in user
/// - `400 Bad Request` - Invalid field, mismatched confirmation, or wrong admin code
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created and signed in", body = SessionUserDto),
        (status = 400, description = "Invalid sign-up data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.admin_code_service)
        .sign_up(payload)
        .await?;

    let session_user = user.to_session_user();
    AuthSession::new(&session).set_user(&session_user).await?;

    Ok((StatusCode::CREATED, Json(session_user.into_dto())))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SessionUserDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.admin_code_service)
        .sign_in(payload)
        .await?;

    let session_user = user.to_session_user();
    AuthSession::new(&session).set_user(&session_user).await?;

    Ok((StatusCode::OK, Json(session_user.into_dto())))
}

/// Sign out, deleting the session.
#[utoipa::path(
    post,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in user from the session.
///
/// # Returns
/// - `200 OK` - The session user, or `null` when nobody is signed in
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session user or null", body = Option<SessionUserDto>)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthSession::new(&session).get_user().await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}
