use sea_orm::DatabaseConnection;

use crate::{
    model::admin::DashboardDto,
    server::{
        data::{
            artist::ArtistRepository, group::GroupRepository, release::ReleaseRepository,
            track::TrackRepository, user::UserRepository,
        },
        error::AppError,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts releases, tracks, artists, groups, and users.
    pub async fn counts(&self) -> Result<DashboardDto, AppError> {
        Ok(DashboardDto {
            releases: ReleaseRepository::new(self.db).count().await?,
            tracks: TrackRepository::new(self.db).count().await?,
            artists: ArtistRepository::new(self.db).count().await?,
            groups: GroupRepository::new(self.db).count().await?,
            users: UserRepository::new(self.db).count().await?,
        })
    }
}
