use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{
    model::form::FormState,
    server::{router::router, state::AppState},
};
use test_utils::factory::user::DEFAULT_PASSWORD;

mod catalog;

/// Boundary used for hand-built multipart bodies.
pub const BOUNDARY: &str = "record-label-test-boundary";

/// Full application router with an in-memory session store and an optional signed-in user.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub fn new(state: AppState) -> Self {
        Self {
            router: router(state)
                .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false)),
            cookie: None,
        }
    }

    /// Signs in through the API with the factory default password.
    pub async fn sign_in(&mut self, email: &str) {
        let response = self
            .send(
                Request::post("/api/auth/signin")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "email": email, "password": DEFAULT_PASSWORD }).to_string(),
                    ))
                    .unwrap(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        self.cookie = Some(session_cookie(&response).unwrap());
    }

    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        let mut request = request;
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .send(Request::get(path).body(Body::empty()).unwrap())
            .await;
        read_json(response).await
    }

    pub async fn json(&self, method: Method, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .send(
                Request::builder()
                    .method(method)
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        read_json(response).await
    }

    /// Submits a URL-encoded form to an action.
    pub async fn form(&mut self, path: &str, fields: &[(&str, &str)]) -> (StatusCode, FormState) {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        let response = self
            .send(
                Request::post(path)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await;

        if let Some(cookie) = session_cookie(&response) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Sends a multipart body built with [`multipart_body`].
    pub async fn multipart(&self, path: &str, body: Vec<u8>) -> axum::response::Response {
        self.send(
            Request::post(path)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

fn session_cookie(response: &axum::response::Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(str::to_string)
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Builds a multipart body from text fields and an optional `image` part.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"banner.png\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
