//! Artist factory for creating test artist entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ArtistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    bio: Option<String>,
    image_url: Option<String>,
}

impl<'a> ArtistFactory<'a> {
    /// Creates a new ArtistFactory named `"Artist {id}"` with no bio or image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Artist {}", next_id()),
            bio: None,
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::artist::Model, DbErr> {
        let now = Utc::now();
        entity::artist::ActiveModel {
            name: ActiveValue::Set(self.name),
            bio: ActiveValue::Set(self.bio),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an artist with default values.
pub async fn create_artist(db: &DatabaseConnection) -> Result<entity::artist::Model, DbErr> {
    ArtistFactory::new(db).build().await
}
