//! Notification banner domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{NotificationDto, NotificationInputDto},
    server::{error::service::ServiceError, util::validate::validate_input},
};

/// URL prefix under which the upload directory is served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Largest banner upload request accepted, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub message: String,
    pub secondary_message: Option<String>,
    pub link: Option<String>,
    /// Rendered banner path relative to the upload directory.
    pub image_path: Option<String>,
    pub active: bool,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            message: entity.message,
            secondary_message: entity.secondary_message,
            link: entity.link,
            image_path: entity.image_path,
            active: entity.active,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            message: self.message,
            secondary_message: self.secondary_message,
            link: self.link,
            image_url: self
                .image_path
                .map(|path| format!("{}/{}", UPLOADS_URL_PREFIX, path)),
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Validated fields for a new banner. The image is handled separately.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationParams {
    pub message: String,
    pub secondary_message: Option<String>,
    pub link: Option<String>,
    pub active: bool,
    pub created_by: Option<i32>,
}

impl NotificationParams {
    /// Validates the request body and attributes the banner to `created_by`.
    pub fn try_from_dto(
        dto: NotificationInputDto,
        created_by: Option<i32>,
    ) -> Result<Self, ServiceError> {
        validate_input(&dto, NotificationInputDto::FIELDS)?;

        Ok(Self {
            message: dto.message.unwrap_or_default(),
            secondary_message: dto.secondary_message,
            link: dto.link,
            active: dto.active,
            created_by,
        })
    }
}
