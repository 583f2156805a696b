//! Release factory for creating test release entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test releases with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let release = ReleaseFactory::new(&db)
///     .title("Night Drive")
///     .catalog_number("LBL-001")
///     .artist(artist.id)
///     .build()
///     .await?;
/// ```
pub struct ReleaseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    released_on: NaiveDate,
    cover_art: String,
    catalog_number: Option<String>,
    description: Option<String>,
    artists: Vec<i32>,
}

impl<'a> ReleaseFactory<'a> {
    /// Creates a new ReleaseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Release {id}"`
    /// - released_on: 2024-01-01
    /// - cover_art: `"https://cdn.example.com/covers/{id}.jpg"`
    /// - no catalog number, description, or artists
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Release {}", id),
            released_on: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            cover_art: format!("https://cdn.example.com/covers/{}.jpg", id),
            catalog_number: None,
            description: None,
            artists: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn released_on(mut self, released_on: NaiveDate) -> Self {
        self.released_on = released_on;
        self
    }

    pub fn catalog_number(mut self, catalog_number: impl Into<String>) -> Self {
        self.catalog_number = Some(catalog_number.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Credits an existing artist on the release.
    pub fn artist(mut self, artist_id: i32) -> Self {
        self.artists.push(artist_id);
        self
    }

    pub async fn build(self) -> Result<entity::release::Model, DbErr> {
        let now = Utc::now();
        let release = entity::release::ActiveModel {
            title: ActiveValue::Set(self.title),
            released_on: ActiveValue::Set(self.released_on),
            cover_art: ActiveValue::Set(self.cover_art),
            catalog_number: ActiveValue::Set(self.catalog_number),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for artist_id in self.artists {
            entity::release_artist::ActiveModel {
                release_id: ActiveValue::Set(release.id),
                artist_id: ActiveValue::Set(artist_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(release)
    }
}

/// Creates a release with default values.
pub async fn create_release(db: &DatabaseConnection) -> Result<entity::release::Model, DbErr> {
    ReleaseFactory::new(db).build().await
}
