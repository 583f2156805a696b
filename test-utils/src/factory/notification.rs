//! Notification banner factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    message: String,
    secondary_message: Option<String>,
    image_path: Option<String>,
    active: bool,
    created_by: Option<i32>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new inactive banner with message `"Notification {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            message: format!("Notification {}", next_id()),
            secondary_message: None,
            image_path: None,
            active: false,
            created_by: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn secondary_message(mut self, secondary_message: impl Into<String>) -> Self {
        self.secondary_message = Some(secondary_message.into());
        self
    }

    /// Sets the stored image path, relative to the upload directory.
    pub fn image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();
        entity::notification::ActiveModel {
            message: ActiveValue::Set(self.message),
            secondary_message: ActiveValue::Set(self.secondary_message),
            link: ActiveValue::Set(None),
            image_path: ActiveValue::Set(self.image_path),
            active: ActiveValue::Set(self.active),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inactive banner with default values.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db).build().await
}
