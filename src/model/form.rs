use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Outcome of a form submission.
///
/// Carries the submitted values back so the form can be re-rendered, field-level error
/// messages keyed by form field name, and flags for success and timeouts. Errors not tied
/// to a single field are stored under [`FormState::GENERAL`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub errors: BTreeMap<String, Vec<String>>,
    pub fields: BTreeMap<String, String>,
    pub success: bool,
    pub has_timeout: bool,
}

impl FormState {
    /// Key for errors that apply to the whole form.
    pub const GENERAL: &'static str = "_form";
}
