//! Request validation helpers built on `validator`.
//!
//! `validator` reports errors in a hash map, so the order of fields is lost. Callers pass
//! the form's field order to get a deterministic first error.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::server::error::service::ServiceError;

/// Validates `input`, returning the first failing field in `order`.
///
/// # Arguments
/// - `input` - Request DTO deriving `Validate`
/// - `order` - Field names in the order they appear in the form
///
/// # Returns
/// - `Ok(())` - Input is valid
/// - `Err(ServiceError::Validation)` - Message of the first failing field
pub fn validate_input<T: Validate>(input: &T, order: &[&str]) -> Result<(), ServiceError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let messages = field_messages(&errors, order);
    let (field, message) = messages
        .into_iter()
        .next()
        .unwrap_or_else(|| (String::new(), vec!["Invalid input".to_string()]));

    Err(ServiceError::Validation {
        field: (!field.is_empty()).then_some(field),
        message: message.into_iter().next().unwrap_or_default(),
    })
}

/// Collects every failing field with all its messages, for form re-rendering.
pub fn field_errors<T: Validate>(input: &T) -> BTreeMap<String, Vec<String>> {
    match input.validate() {
        Ok(()) => BTreeMap::new(),
        Err(errors) => field_messages(&errors, &[]).into_iter().collect(),
    }
}

fn field_messages(errors: &ValidationErrors, order: &[&str]) -> Vec<(String, Vec<String>)> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field: &str = field.as_ref();
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    let rank = |field: &str| order.iter().position(|f| *f == field).unwrap_or(order.len());
    fields.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
    fields
}

/// Sorts and removes duplicate IDs from a relation list.
pub fn dedup_ids(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
