use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::track::TrackRepository,
    error::{service::ServiceError, AppError},
    model::{
        page::{Page, PageRequest},
        track::{Track, TrackParams},
    },
};

fn classify(err: DbErr) -> AppError {
    match ServiceError::from(err) {
        // The only foreign key on a track is its release.
        ServiceError::Validation { field: None, .. } => {
            ServiceError::validation("release_id", "Release does not exist").into()
        }
        other => other.into(),
    }
}

fn not_found() -> AppError {
    ServiceError::NotFound("Track not found".to_string()).into()
}

pub struct TrackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of tracks, optionally limited to one release
    pub async fn get_paginated(
        &self,
        page: PageRequest,
        release_id: Option<i32>,
    ) -> Result<Page<Track>, AppError> {
        TrackRepository::new(self.db)
            .get_paginated(&page, release_id)
            .await
            .map_err(classify)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Track, AppError> {
        TrackRepository::new(self.db)
            .find_by_id(id)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, params: TrackParams) -> Result<Track, AppError> {
        TrackRepository::new(self.db)
            .create(params)
            .await
            .map_err(classify)
    }

    pub async fn update(&self, id: i32, params: TrackParams) -> Result<Track, AppError> {
        TrackRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TrackRepository::new(self.db)
            .delete(id)
            .await
            .map_err(classify)?
        {
            return Err(not_found());
        }

        Ok(())
    }
}
