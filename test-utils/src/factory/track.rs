//! Track factory for creating test track entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TrackFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    duration_seconds: i32,
    track_number: Option<i32>,
    release_id: Option<i32>,
}

impl<'a> TrackFactory<'a> {
    /// Creates a new TrackFactory titled `"Track {id}"`, 3:30 long, not on any release.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Track {}", next_id()),
            duration_seconds: 210,
            track_number: None,
            release_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn duration_seconds(mut self, duration_seconds: i32) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Places the track on a release at the given position.
    pub fn on_release(mut self, release_id: i32, track_number: i32) -> Self {
        self.release_id = Some(release_id);
        self.track_number = Some(track_number);
        self
    }

    pub async fn build(self) -> Result<entity::track::Model, DbErr> {
        let now = Utc::now();
        entity::track::ActiveModel {
            title: ActiveValue::Set(self.title),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            track_number: ActiveValue::Set(self.track_number),
            release_id: ActiveValue::Set(self.release_id),
            audio_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standalone track with default values.
pub async fn create_track(db: &DatabaseConnection) -> Result<entity::track::Model, DbErr> {
    TrackFactory::new(db).build().await
}
