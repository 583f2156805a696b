//! Track data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::contains_pattern;
use crate::server::model::{
    page::{Page, PageRequest},
    track::{Track, TrackParams},
};

pub struct TrackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of tracks ordered by release and track number.
    ///
    /// # Arguments
    /// - `page` - Offset, limit, and optional case-insensitive title search
    /// - `release_id` - Only include tracks on this release
    ///
    /// # Returns
    /// - `Ok(Page<Track>)` - Tracks with their release titles plus the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: &PageRequest,
        release_id: Option<i32>,
    ) -> Result<Page<Track>, DbErr> {
        let mut query = entity::prelude::Track::find();
        if let Some(search) = &page.search {
            query = query.filter(entity::track::Column::Title.like(contains_pattern(search)));
        }
        if let Some(release_id) = release_id {
            query = query.filter(entity::track::Column::ReleaseId.eq(release_id));
        }

        let count = query.clone().count(self.db).await?;
        let tracks = query
            .order_by_asc(entity::track::Column::ReleaseId)
            .order_by_asc(entity::track::Column::TrackNumber)
            .order_by_asc(entity::track::Column::Id)
            .offset(page.skip)
            .limit(page.take)
            .find_also_related(entity::prelude::Release)
            .all(self.db)
            .await?;

        Ok(Page {
            items: tracks
                .into_iter()
                .map(|(track, release)| Track::from_entity(track, release))
                .collect(),
            count,
            skip: page.skip,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Track>, DbErr> {
        let track = entity::prelude::Track::find_by_id(id)
            .find_also_related(entity::prelude::Release)
            .one(self.db)
            .await?;

        Ok(track.map(|(track, release)| Track::from_entity(track, release)))
    }

    /// Creates a track, optionally attached to a release.
    ///
    /// # Returns
    /// - `Ok(Track)` - The created track
    /// - `Err(DbErr)` - Unknown release or other database error
    pub async fn create(&self, params: TrackParams) -> Result<Track, DbErr> {
        let now = Utc::now();
        let track = entity::track::ActiveModel {
            title: ActiveValue::Set(params.title),
            duration_seconds: ActiveValue::Set(params.duration_seconds),
            track_number: ActiveValue::Set(params.track_number),
            release_id: ActiveValue::Set(params.release_id),
            audio_url: ActiveValue::Set(params.audio_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(track.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Track not found after creation".to_string()))
    }

    /// Replaces every field of a track.
    ///
    /// # Returns
    /// - `Ok(Some(Track))` - The updated track
    /// - `Ok(None)` - No track with that ID
    pub async fn update(&self, id: i32, params: TrackParams) -> Result<Option<Track>, DbErr> {
        let Some(existing) = entity::prelude::Track::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut track: entity::track::ActiveModel = existing.into();
        track.title = ActiveValue::Set(params.title);
        track.duration_seconds = ActiveValue::Set(params.duration_seconds);
        track.track_number = ActiveValue::Set(params.track_number);
        track.release_id = ActiveValue::Set(params.release_id);
        track.audio_url = ActiveValue::Set(params.audio_url);
        track.updated_at = ActiveValue::Set(Utc::now());
        track.update(self.db).await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Track::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Track::find().count(self.db).await
    }
}
