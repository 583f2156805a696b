//! Raw form submissions.
//!
//! HTML forms submit every value as a string. `FormInput` keeps the submitted strings so
//! they can be echoed back into a `FormState`, and converts them into the typed request
//! DTOs, recording a field error for any value that does not parse.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::form::FormState;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.0
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Untrimmed value for passwords, `None` when missing or empty.
    pub fn secret(&self, name: &str) -> Option<String> {
        self.0.get(name).filter(|v| !v.is_empty()).cloned()
    }

    /// Checkbox semantics: present with `on`, `true`, or `1`.
    pub fn flag(&self, name: &str) -> bool {
        self.0
            .get(name)
            .is_some_and(|v| matches!(v.trim(), "on" | "true" | "1"))
    }

    /// Parses an optional integer field.
    ///
    /// A blank value is `None`. A value that is not an integer is also `None` and records
    /// `message` against the field in `state`.
    pub fn number(&self, name: &str, message: &str, state: &mut FormState) -> Option<i32> {
        let value = self.text(name)?;
        match value.parse() {
            Ok(number) => Some(number),
            Err(_) => {
                state.set_field_error(name, message);
                None
            }
        }
    }

    /// Parses a comma-separated ID list, ignoring empty entries.
    pub fn ids(&self, name: &str, state: &mut FormState) -> Vec<i32> {
        let Some(value) = self.text(name) else {
            return Vec::new();
        };

        let parsed: Result<Vec<i32>, _> = value
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::parse)
            .collect();

        parsed.unwrap_or_else(|_| {
            state.set_field_error(name, "Must be a comma-separated list of IDs");
            Vec::new()
        })
    }

    /// Submitted values to re-render the form with, leaving out `hidden` fields.
    pub fn echo(&self, hidden: &[&str]) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter(|(name, _)| !hidden.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormInput {
    fn from(fields: [(&str, &str); N]) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treats_blank_text_as_missing() {
        let input = FormInput::from([("title", "  "), ("link", " https://label.example ")]);

        assert_eq!(input.text("title"), None);
        assert_eq!(input.text("link"), Some("https://label.example".to_string()));
        assert_eq!(input.text("missing"), None);
    }

    #[test]
    fn keeps_password_whitespace() {
        let input = FormInput::from([("password", " secret  pass ")]);

        assert_eq!(input.secret("password"), Some(" secret  pass ".to_string()));
    }

    #[test]
    fn reads_checkbox_flags() {
        assert!(FormInput::from([("active", "on")]).flag("active"));
        assert!(FormInput::from([("active", "true")]).flag("active"));
        assert!(!FormInput::from([("active", "off")]).flag("active"));
        assert!(!FormInput::default().flag("active"));
    }

    /// Tests that an unparseable number is reported against its field.
    ///
    /// Expected: None with the given message recorded for `duration_seconds`
    #[test]
    fn records_invalid_number() {
        let mut state = FormState::default();
        let input = FormInput::from([("duration_seconds", "3:30"), ("track_number", "4")]);

        let duration = input.number("duration_seconds", "Duration must be in seconds", &mut state);
        let track_number = input.number("track_number", "Track number must be a number", &mut state);

        assert_eq!(duration, None);
        assert_eq!(track_number, Some(4));
        assert_eq!(
            state.errors["duration_seconds"],
            vec!["Duration must be in seconds".to_string()]
        );
        assert!(!state.errors.contains_key("track_number"));
    }

    #[test]
    fn parses_id_lists() {
        let mut state = FormState::default();

        let ids = FormInput::from([("artist_ids", "3, 1,,2")]).ids("artist_ids", &mut state);
        let bad = FormInput::from([("member_ids", "1,two")]).ids("member_ids", &mut state);

        assert_eq!(ids, vec![3, 1, 2]);
        assert!(bad.is_empty());
        assert!(state.errors.contains_key("member_ids"));
        assert!(!state.errors.contains_key("artist_ids"));
    }

    #[test]
    fn echo_hides_secrets() {
        let input = FormInput::from([("email", "a@label.example"), ("password", "hunter22")]);

        let echoed = input.echo(&["password"]);

        assert_eq!(echoed.len(), 1);
        assert_eq!(echoed["email"], "a@label.example");
    }
}
