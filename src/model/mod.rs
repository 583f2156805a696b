//! Data transfer objects shared by the HTTP API and form actions.
//!
//! DTOs are the serialized shapes exchanged with clients. Server-side domain models live in
//! `server::model` and convert into these types at the controller boundary.

pub mod admin;
pub mod api;
pub mod artist;
pub mod featured_artist;
pub mod form;
pub mod group;
pub mod health;
pub mod notification;
pub mod release;
pub mod track;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, trimming it and treating blank input as absent.
///
/// Forms submit empty inputs as `""`, which must fail `required` validation the same way
/// a missing field does.
pub fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Like [`non_blank`] but keeps surrounding whitespace, for passwords.
pub fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
