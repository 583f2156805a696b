use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Minimal artist reference embedded in releases, groups, and featured entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummaryDto {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedArtistsDto {
    pub artists: Vec<ArtistDto>,
    pub count: u64,
    pub has_more: bool,
}

/// Request body for creating or fully updating an artist.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInputDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Name is required"),
        length(max = 200, message = "Name must be at most 200 characters")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    pub image_url: Option<String>,
}

impl ArtistInputDto {
    /// Validation order used when reporting a single error.
    pub const FIELDS: &'static [&'static str] = &["name", "bio", "image_url"];
}
