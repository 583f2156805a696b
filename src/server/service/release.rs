use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::release::ReleaseRepository,
    error::{
        service::{ConflictRule, ServiceError},
        AppError,
    },
    model::{
        page::{Page, PageRequest},
        release::{Release, ReleaseParams},
    },
};

/// Uniqueness constraints on releases and how they are reported.
pub const RELEASE_CONFLICTS: &[ConflictRule] = &[ConflictRule::new(
    "release.catalog_number",
    "catalog_number",
    "A release with this catalog number already exists",
)];

fn classify(err: DbErr) -> AppError {
    match ServiceError::classify(err, RELEASE_CONFLICTS) {
        // Foreign keys only exist on the artist links.
        ServiceError::Validation { field: None, .. } => {
            ServiceError::validation("artist_ids", "A credited artist does not exist").into()
        }
        other => other.into(),
    }
}

fn not_found() -> AppError {
    ServiceError::NotFound("Release not found".to_string()).into()
}

pub struct ReleaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReleaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of releases with their artists
    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<Release>, AppError> {
        ReleaseRepository::new(self.db)
            .get_paginated(&page)
            .await
            .map_err(classify)
    }

    /// Gets a release by ID, `ServiceError::NotFound` if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Release, AppError> {
        ReleaseRepository::new(self.db)
            .find_by_id(id)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, params: ReleaseParams) -> Result<Release, AppError> {
        let release = ReleaseRepository::new(self.db)
            .create(params)
            .await
            .map_err(classify)?;

        tracing::info!("Created release {} \"{}\"", release.id, release.title);

        Ok(release)
    }

    pub async fn update(&self, id: i32, params: ReleaseParams) -> Result<Release, AppError> {
        ReleaseRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReleaseRepository::new(self.db)
            .delete(id)
            .await
            .map_err(classify)?
        {
            return Err(not_found());
        }

        tracing::info!("Deleted release {}", id);

        Ok(())
    }
}
