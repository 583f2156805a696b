//! Mapping service results onto form states.

use std::collections::BTreeMap;

use validator::Validate;

use crate::{
    model::form::FormState,
    server::{
        error::{
            auth::AuthError,
            overlay::OverlayError,
            service::{ServiceError, TIMEOUT_MESSAGE},
            AppError,
        },
        util::{multipart::IMAGE_FIELD, validate::field_errors},
    },
};

/// Shown for failures the user cannot act on. The cause is logged.
pub const UNKNOWN_MESSAGE: &str = "An unexpected error occurred, please try again";

impl FormState {
    /// State carrying back the submitted values, before any errors are recorded.
    pub fn with_fields(fields: BTreeMap<String, String>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Successful submission. Submitted values are dropped so the form resets.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.set_field_error(Self::GENERAL, message);
    }

    pub fn set_unknown_error(&mut self) {
        self.set_general_error(UNKNOWN_MESSAGE);
    }

    /// Records every failing field of `input`.
    ///
    /// Fields that already carry an error, such as a number that failed to parse, keep
    /// that error alone.
    pub fn validate<T: Validate>(&mut self, input: &T) {
        for (field, messages) in field_errors(input) {
            if self.errors.contains_key(&field) {
                continue;
            }
            self.errors.insert(field, messages);
        }
    }

    /// Records a classified service failure.
    ///
    /// `conflicts` maps a field to the message shown when that field conflicts, replacing
    /// the service's message. Timeouts only raise `has_timeout` with a retry hint and are
    /// never reported as unknown errors.
    pub fn apply_service_error(&mut self, err: ServiceError, conflicts: &[(&str, &str)]) {
        match err {
            ServiceError::Timeout => {
                tracing::warn!("Form submission timed out");
                self.has_timeout = true;
                self.set_general_error(TIMEOUT_MESSAGE);
            }
            ServiceError::Conflict {
                field: Some(field),
                message,
            } => {
                let message = conflicts
                    .iter()
                    .find(|(f, _)| *f == field)
                    .map(|(_, m)| m.to_string())
                    .unwrap_or(message);
                self.set_field_error(&field, message);
            }
            ServiceError::Validation {
                field: Some(field),
                message,
            } => self.set_field_error(&field, message),
            ServiceError::Unknown(detail) => {
                tracing::error!("Form submission failed: {}", detail);
                self.set_unknown_error();
            }
            other => self.set_general_error(other.client_message()),
        }
    }

    /// Records any application error returned while handling a submission.
    pub fn apply_error(&mut self, err: AppError, conflicts: &[(&str, &str)]) {
        match err {
            AppError::Service(err) => self.apply_service_error(err, conflicts),
            AppError::AuthErr(AuthError::InvalidCredentials) => {
                self.set_general_error(AuthError::InvalidCredentials.to_string())
            }
            AppError::AuthErr(AuthError::AccessDenied(..)) => {
                self.set_general_error("You do not have permission to do this")
            }
            AppError::AuthErr(_) => self.set_general_error("You must be signed in to do this"),
            AppError::OverlayErr(OverlayError::ImageLoad(err)) => {
                tracing::debug!("Rejected banner image: {}", err);
                self.set_field_error(IMAGE_FIELD, "The uploaded image could not be read");
            }
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                self.set_general_error(message)
            }
            other => {
                tracing::error!("Form submission failed: {}", other);
                self.set_unknown_error();
            }
        }
    }

    /// Success state for `Ok`, otherwise `self` with the error recorded.
    pub fn resolve<T>(mut self, result: Result<T, AppError>, conflicts: &[(&str, &str)]) -> Self {
        match result {
            Ok(_) => Self::succeeded(),
            Err(err) => {
                self.apply_error(err, conflicts);
                self
            }
        }
    }
}
