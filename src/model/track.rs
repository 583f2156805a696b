use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: i32,
    pub title: String,
    pub duration_seconds: i32,
    pub track_number: Option<i32>,
    pub release_id: Option<i32>,
    pub release_title: Option<String>,
    pub audio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedTracksDto {
    pub tracks: Vec<TrackDto>,
    pub count: u64,
    pub has_more: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackInputDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Title is required"),
        length(max = 200, message = "Title must be at most 200 characters")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Duration is required"),
        range(min = 1, message = "Duration must be a positive number of seconds")
    )]
    pub duration_seconds: Option<i32>,
    #[validate(range(min = 1, message = "Track number must be at least 1"))]
    pub track_number: Option<i32>,
    pub release_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    pub audio_url: Option<String>,
}

impl TrackInputDto {
    pub const FIELDS: &'static [&'static str] = &[
        "title",
        "duration_seconds",
        "track_number",
        "release_id",
        "audio_url",
    ];
}
