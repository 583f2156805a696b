use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Request, StatusCode},
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use super::*;
use crate::server::{middleware::guard::require_role, state::AppState};

/// Router with a sign-in shortcut and one route per role.
fn app(state: AppState) -> Router {
    let admin = require_role(
        Router::new().route(
            "/admin-only",
            get(|Extension(user): Extension<User>| async move { user.name }),
        ),
        state.clone(),
        Role::Admin,
    );
    let member = require_role(
        Router::new().route(
            "/members",
            get(|Extension(user): Extension<User>| async move { user.email }),
        ),
        state.clone(),
        Role::User,
    );

    Router::new()
        .route(
            "/sign-in/{id}",
            post(
                |State(state): State<AppState>, session: Session, Path(id): Path<i32>| async move {
                    let user = crate::server::data::user::UserRepository::new(&state.db)
                        .find_by_id(id)
                        .await
                        .unwrap()
                        .unwrap();
                    AuthSession::new(&session)
                        .set_user(&user.to_session_user())
                        .await
                        .unwrap();
                },
            ),
        )
        .merge(admin)
        .merge(member)
        .with_state(state)
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
}

async fn sign_in(app: &Router, user_id: i32) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/sign-in/{}", user_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn get_status(app: &Router, path: &str, cookie: Option<&str>) -> StatusCode {
    let mut request = Request::get(path);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

/// Tests the role guard across anonymous, regular, and admin requests.
///
/// Expected: 401 anonymous, 403 regular user on admin route, 200 otherwise
#[tokio::test]
async fn guards_routes_by_role() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let user = factory::user::create_user(db).await.unwrap();
    let app = app(AppState::for_test(db.clone()));

    assert_eq!(
        get_status(&app, "/admin-only", None).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        get_status(&app, "/members", None).await,
        StatusCode::UNAUTHORIZED
    );

    let user_cookie = sign_in(&app, user.id).await;
    assert_eq!(
        get_status(&app, "/members", Some(&user_cookie)).await,
        StatusCode::OK
    );
    assert_eq!(
        get_status(&app, "/admin-only", Some(&user_cookie)).await,
        StatusCode::FORBIDDEN
    );

    let admin_cookie = sign_in(&app, admin.id).await;
    assert_eq!(
        get_status(&app, "/admin-only", Some(&admin_cookie)).await,
        StatusCode::OK
    );
}
