use axum::http::StatusCode;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    model::form::FormState,
    server::{controller::test::TestApp, state::AppState},
};

mod auth;

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap()
}

fn app(test: &TestContext) -> TestApp {
    TestApp::new(AppState::for_test(test.db.clone().unwrap()))
}

/// Submits `fields` and checks the status every action answers with.
async fn submit(app: &mut TestApp, path: &str, fields: &[(&str, &str)]) -> FormState {
    let (status, form) = app.form(path, fields).await;
    assert_eq!(status, StatusCode::OK);
    form
}

fn errors<'a>(form: &'a FormState, field: &str) -> Vec<&'a str> {
    form.errors
        .get(field)
        .map(|messages| messages.iter().map(String::as_str).collect())
        .unwrap_or_default()
}
