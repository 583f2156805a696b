use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::artist::ArtistSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedArtistDto {
    pub id: i32,
    pub artist: ArtistSummaryDto,
    pub headline: String,
    pub position: i32,
    pub published: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedArtistInputDto {
    #[validate(required(message = "Artist is required"))]
    pub artist_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Headline is required"),
        length(max = 200, message = "Headline must be at most 200 characters")
    )]
    pub headline: Option<String>,
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,
    #[serde(default)]
    pub published: bool,
}

impl FeaturedArtistInputDto {
    pub const FIELDS: &'static [&'static str] = &["artist_id", "headline", "position"];
}
