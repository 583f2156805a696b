use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::artist::ArtistSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDto {
    pub id: i32,
    pub title: String,
    pub released_on: NaiveDate,
    pub cover_art: String,
    pub catalog_number: Option<String>,
    pub description: Option<String>,
    pub artists: Vec<ArtistSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedReleasesDto {
    pub releases: Vec<ReleaseDto>,
    pub count: u64,
    pub has_more: bool,
}

/// Request body for creating or fully updating a release.
///
/// Every field is optional at the deserialization level so that missing fields are
/// reported through validation with a field-specific message instead of a parse failure.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInputDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Title is required"),
        length(max = 200, message = "Title must be at most 200 characters")
    )]
    pub title: Option<String>,
    /// Release date formatted as `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(required(message = "Release date is required"))]
    pub released_on: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(required(message = "Cover art is required"))]
    pub cover_art: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(length(max = 32, message = "Catalog number must be at most 32 characters"))]
    pub catalog_number: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    pub description: Option<String>,
    #[serde(default)]
    pub artist_ids: Vec<i32>,
}

impl ReleaseInputDto {
    /// Validation order used when reporting a single error.
    pub const FIELDS: &'static [&'static str] = &[
        "title",
        "released_on",
        "cover_art",
        "catalog_number",
        "description",
    ];
}
