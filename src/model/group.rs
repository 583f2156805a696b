use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::artist::ArtistSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub members: Vec<ArtistSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedGroupsDto {
    pub groups: Vec<GroupDto>,
    pub count: u64,
    pub has_more: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupInputDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Name is required"),
        length(max = 200, message = "Name must be at most 200 characters")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<i32>,
}

impl GroupInputDto {
    pub const FIELDS: &'static [&'static str] = &["name", "description", "image_url"];
}
