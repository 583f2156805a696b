use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::artist::ArtistRepository,
    error::{
        service::{ConflictRule, ServiceError},
        AppError,
    },
    model::{
        artist::{Artist, ArtistParams},
        page::{Page, PageRequest},
    },
};

pub const ARTIST_CONFLICTS: &[ConflictRule] = &[ConflictRule::new(
    "artist.name",
    "name",
    "An artist with this name already exists",
)];

fn classify(err: DbErr) -> AppError {
    ServiceError::classify(err, ARTIST_CONFLICTS).into()
}

fn not_found() -> AppError {
    ServiceError::NotFound("Artist not found".to_string()).into()
}

pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<Artist>, AppError> {
        ArtistRepository::new(self.db)
            .get_paginated(&page)
            .await
            .map_err(classify)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Artist, AppError> {
        ArtistRepository::new(self.db)
            .find_by_id(id)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, params: ArtistParams) -> Result<Artist, AppError> {
        ArtistRepository::new(self.db)
            .create(params)
            .await
            .map_err(classify)
    }

    pub async fn update(&self, id: i32, params: ArtistParams) -> Result<Artist, AppError> {
        ArtistRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ArtistRepository::new(self.db)
            .delete(id)
            .await
            .map_err(classify)?
        {
            return Err(not_found());
        }

        Ok(())
    }
}
