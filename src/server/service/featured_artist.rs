use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::featured_artist::FeaturedArtistRepository,
    error::{
        service::{ConflictRule, ServiceError},
        AppError,
    },
    model::featured_artist::{FeaturedArtist, FeaturedArtistParams},
};

pub const FEATURED_ARTIST_CONFLICTS: &[ConflictRule] = &[ConflictRule::new(
    "featured_artist.artist_id",
    "artist_id",
    "This artist is already featured",
)];

fn classify(err: DbErr) -> AppError {
    match ServiceError::classify(err, FEATURED_ARTIST_CONFLICTS) {
        ServiceError::Validation { field: None, .. } => {
            ServiceError::validation("artist_id", "Artist does not exist").into()
        }
        other => other.into(),
    }
}

pub struct FeaturedArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeaturedArtistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published featured artists by position
    pub async fn get_published(&self) -> Result<Vec<FeaturedArtist>, AppError> {
        FeaturedArtistRepository::new(self.db)
            .get_published()
            .await
            .map_err(classify)
    }

    pub async fn create(&self, params: FeaturedArtistParams) -> Result<FeaturedArtist, AppError> {
        FeaturedArtistRepository::new(self.db)
            .create(params)
            .await
            .map_err(classify)
    }
}
