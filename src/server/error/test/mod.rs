use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use sea_orm::{ConnAcquireErr, DbErr, RuntimeErr};

use crate::server::error::{
    auth::AuthError,
    service::{ConflictRule, ServiceError, TIMEOUT_MESSAGE},
    AppError,
};


/// Reads a JSON error body into its `error` message.
async fn error_message(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    body["error"].as_str().unwrap_or_default().to_string()
}
