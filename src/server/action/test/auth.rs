use axum::http::StatusCode;
use test_utils::factory::{self, user::DEFAULT_PASSWORD};

use super::{app, errors, setup, submit};
use crate::model::form::FormState;

#[tokio::test]
async fn signs_up_and_starts_session() {
    let test = setup().await;
    let mut app = app(&test);

    let form = submit(
        &mut app,
        "/actions/sign-up",
        &[
            ("email", "mira@label.example"),
            ("name", "Mira"),
            ("password", DEFAULT_PASSWORD),
            ("confirm_password", DEFAULT_PASSWORD),
        ],
    )
    .await;
    let (status, session) = app.get("/api/auth/session").await;

    assert!(form.success);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["email"], "mira@label.example");
}

/// Tests a sign-up whose confirmation does not match.
///
/// Expected: error on confirm_password, passwords not echoed back
#[tokio::test]
async fn rejects_mismatched_confirmation() {
    let test = setup().await;
    let mut app = app(&test);

    let form = submit(
        &mut app,
        "/actions/sign-up",
        &[
            ("email", "mira@label.example"),
            ("name", "Mira"),
            ("password", DEFAULT_PASSWORD),
            ("confirm_password", "something-else"),
        ],
    )
    .await;

    assert_eq!(errors(&form, "confirm_password"), vec!["Passwords do not match"]);
    assert_eq!(form.fields["email"], "mira@label.example");
    assert!(!form.fields.contains_key("password"));
    assert!(!form.fields.contains_key("confirm_password"));
}

#[tokio::test]
async fn scopes_email_conflict() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await.unwrap();
    let mut app = app(&test);

    let form = submit(
        &mut app,
        "/actions/sign-up",
        &[
            ("email", &user.email),
            ("name", "Someone"),
            ("password", DEFAULT_PASSWORD),
            ("confirm_password", DEFAULT_PASSWORD),
        ],
    )
    .await;

    assert_eq!(
        errors(&form, "email"),
        vec!["An account with this email already exists, try signing in instead"]
    );
}

#[tokio::test]
async fn rejects_wrong_password() {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await.unwrap();
    let mut app = app(&test);

    let form = submit(
        &mut app,
        "/actions/sign-in",
        &[("email", &user.email), ("password", "not-the-password")],
    )
    .await;
    let (_, session) = app.get("/api/auth/session").await;

    assert_eq!(
        errors(&form, FormState::GENERAL),
        vec!["Invalid email or password"]
    );
    assert!(session.is_null());
}
