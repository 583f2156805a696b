mod catalog;
mod health;
mod notification;
mod user;

use crate::server::error::{service::ServiceError, AppError};

/// Unwraps the `ServiceError` of a failed service call.
fn service_error<T: std::fmt::Debug>(result: Result<T, AppError>) -> ServiceError {
    match result {
        Err(AppError::Service(err)) => err,
        other => panic!("expected a service error, got {:?}", other),
    }
}
