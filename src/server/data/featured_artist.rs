//! Featured artist data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::featured_artist::{FeaturedArtist, FeaturedArtistParams};

pub struct FeaturedArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeaturedArtistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published featured artists in display order.
    ///
    /// # Returns
    /// - `Ok(Vec<FeaturedArtist>)` - Published entries ordered by position, then ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_published(&self) -> Result<Vec<FeaturedArtist>, DbErr> {
        let rows = entity::prelude::FeaturedArtist::find()
            .filter(entity::featured_artist::Column::Published.eq(true))
            .order_by_asc(entity::featured_artist::Column::Position)
            .order_by_asc(entity::featured_artist::Column::Id)
            .find_also_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(featured, artist)| {
                artist.map(|artist| FeaturedArtist::from_entity(featured, artist))
            })
            .collect())
    }

    /// Features an artist.
    ///
    /// # Returns
    /// - `Ok(FeaturedArtist)` - The created entry with its artist
    /// - `Err(DbErr)` - Artist already featured, unknown artist, or other database error
    pub async fn create(&self, params: FeaturedArtistParams) -> Result<FeaturedArtist, DbErr> {
        let featured = entity::featured_artist::ActiveModel {
            artist_id: ActiveValue::Set(params.artist_id),
            headline: ActiveValue::Set(params.headline),
            position: ActiveValue::Set(params.position),
            published: ActiveValue::Set(params.published),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let artist = entity::prelude::Artist::find_by_id(featured.artist_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Featured artist not found".to_string()))?;

        Ok(FeaturedArtist::from_entity(featured, artist))
    }
}
