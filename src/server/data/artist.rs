//! Artist data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::contains_pattern;
use crate::server::model::{
    artist::{Artist, ArtistParams},
    page::{Page, PageRequest},
};

pub struct ArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of artists ordered by name.
    ///
    /// # Returns
    /// - `Ok(Page<Artist>)` - Artists plus the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: &PageRequest) -> Result<Page<Artist>, DbErr> {
        let mut query = entity::prelude::Artist::find();
        if let Some(search) = &page.search {
            query = query.filter(entity::artist::Column::Name.like(contains_pattern(search)));
        }

        let count = query.clone().count(self.db).await?;
        let artists = query
            .order_by_asc(entity::artist::Column::Name)
            .offset(page.skip)
            .limit(page.take)
            .all(self.db)
            .await?;

        Ok(Page {
            items: artists.into_iter().map(Artist::from_entity).collect(),
            count,
            skip: page.skip,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Artist>, DbErr> {
        let artist = entity::prelude::Artist::find_by_id(id).one(self.db).await?;

        Ok(artist.map(Artist::from_entity))
    }

    /// Creates an artist.
    ///
    /// # Returns
    /// - `Ok(Artist)` - The created artist
    /// - `Err(DbErr)` - Duplicate name or other database error
    pub async fn create(&self, params: ArtistParams) -> Result<Artist, DbErr> {
        let now = Utc::now();
        let artist = entity::artist::ActiveModel {
            name: ActiveValue::Set(params.name),
            bio: ActiveValue::Set(params.bio),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Artist::from_entity(artist))
    }

    /// Replaces every field of an artist.
    ///
    /// # Returns
    /// - `Ok(Some(Artist))` - The updated artist
    /// - `Ok(None)` - No artist with that ID
    /// - `Err(DbErr)` - Duplicate name or other database error
    pub async fn update(&self, id: i32, params: ArtistParams) -> Result<Option<Artist>, DbErr> {
        let Some(existing) = entity::prelude::Artist::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut artist: entity::artist::ActiveModel = existing.into();
        artist.name = ActiveValue::Set(params.name);
        artist.bio = ActiveValue::Set(params.bio);
        artist.image_url = ActiveValue::Set(params.image_url);
        artist.updated_at = ActiveValue::Set(Utc::now());
        let artist = artist.update(self.db).await?;

        Ok(Some(Artist::from_entity(artist)))
    }

    /// Deletes an artist. Credits, memberships, and featured entries cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Artist::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Artist::find().count(self.db).await
    }
}
