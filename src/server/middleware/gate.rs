//! Path-based authorization gate.
//!
//! Runs on every request whose path matches `/profile`, `/profile/*`, `/admin`, `/admin/*`,
//! or `/api/admin/*`. Unauthenticated visitors are sent to sign-in with a callback to the
//! page they wanted, non-admins get a 403 on admin paths, and signed-in users arriving with
//! a `callbackUrl` are sent on to it.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;
use url::form_urlencoded;

use crate::{
    model::api::ErrorDto,
    server::{
        middleware::session::AuthSession, model::user::SessionUser, util::callback::safe_callback,
    },
};

pub const SIGN_IN_PATH: &str = "/auth/signin";
const CALLBACK_PARAM: &str = "callbackUrl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    /// Any signed-in user.
    Private,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Next,
    Redirect(String),
    Forbidden,
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn classify(path: &str) -> RouteClass {
    if is_under(path, "/admin") || is_under(path, "/api/admin") {
        RouteClass::Admin
    } else if is_under(path, "/profile") {
        RouteClass::Private
    } else {
        RouteClass::Public
    }
}

/// Whether the gate runs for `path` at all.
pub fn is_matched(path: &str) -> bool {
    is_under(path, "/profile")
        || is_under(path, "/admin")
        || path
            .strip_prefix("/api/admin/")
            .is_some_and(|rest| !rest.is_empty())
}

/// Decides what happens to a request.
///
/// # Arguments
/// - `path` - Request path
/// - `query` - Raw query string, if any
/// - `user` - Signed-in user from the session
pub fn decide(path: &str, query: Option<&str>, user: Option<&SessionUser>) -> GateDecision {
    let class = classify(path);

    let Some(user) = user else {
        if class == RouteClass::Public {
            return GateDecision::Next;
        }
        let callback: String = form_urlencoded::byte_serialize(path.as_bytes()).collect();
        return GateDecision::Redirect(format!(
            "{}?{}={}",
            SIGN_IN_PATH, CALLBACK_PARAM, callback
        ));
    };

    match class {
        RouteClass::Public => return GateDecision::Next,
        RouteClass::Admin if !user.is_admin() => return GateDecision::Forbidden,
        _ => {}
    }

    match query.and_then(callback_param).and_then(|c| safe_callback(&c)) {
        Some(callback) if callback != path => GateDecision::Redirect(callback),
        _ => GateDecision::Next,
    }
}

fn callback_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == CALLBACK_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Axum middleware applying [`decide`] to matched paths.
pub async fn route_gate(session: Session, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !is_matched(&path) {
        return next.run(request).await;
    }

    let user = match AuthSession::new(&session).get_user().await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    match decide(&path, request.uri().query(), user.as_ref()) {
        GateDecision::Next => next.run(request).await,
        GateDecision::Redirect(location) => Redirect::to(&location).into_response(),
        GateDecision::Forbidden => {
            tracing::debug!("Gate denied {} to non-admin", path);
            (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response()
        }
    }
}
