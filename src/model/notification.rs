use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    pub message: String,
    pub secondary_message: Option<String>,
    pub link: Option<String>,
    /// Public URL of the rendered banner image, if one was uploaded.
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInputDto {
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(
        required(message = "Message is required"),
        length(max = 280, message = "Message must be at most 280 characters")
    )]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(length(max = 140, message = "Secondary message must be at most 140 characters"))]
    pub secondary_message: Option<String>,
    #[serde(default, deserialize_with = "crate::model::non_blank")]
    #[validate(url(message = "Link must be a valid URL"))]
    pub link: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl NotificationInputDto {
    pub const FIELDS: &'static [&'static str] = &["message", "secondary_message", "link"];
}
