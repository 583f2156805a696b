//! Release data repository for database operations.
//!
//! Releases are stored with their credited artists in the `release_artist` join table.
//! Writes that touch both tables run in a single transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::data::contains_pattern;
use crate::server::model::{
    page::{Page, PageRequest},
    release::{Release, ReleaseParams},
};

pub struct ReleaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReleaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of releases, newest release date first.
    ///
    /// # Arguments
    /// - `page` - Offset, limit, and optional case-insensitive title search
    ///
    /// # Returns
    /// - `Ok(Page<Release>)` - Releases with their artists plus the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: &PageRequest) -> Result<Page<Release>, DbErr> {
        let mut query = entity::prelude::Release::find();
        if let Some(search) = &page.search {
            query = query.filter(entity::release::Column::Title.like(contains_pattern(search)));
        }

        let count = query.clone().count(self.db).await?;
        let releases = query
            .order_by_desc(entity::release::Column::ReleasedOn)
            .order_by_asc(entity::release::Column::Id)
            .offset(page.skip)
            .limit(page.take)
            .all(self.db)
            .await?;

        let mut artists = self
            .artists_by_release(releases.iter().map(|r| r.id).collect())
            .await?;
        let items = releases
            .into_iter()
            .map(|release| {
                let credited = artists.remove(&release.id).unwrap_or_default();
                Release::from_entity(release, credited)
            })
            .collect();

        Ok(Page {
            items,
            count,
            skip: page.skip,
        })
    }

    /// Finds a release by ID with its credited artists.
    ///
    /// # Returns
    /// - `Ok(Some(Release))` - Release found
    /// - `Ok(None)` - No release with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Release>, DbErr> {
        let Some(release) = entity::prelude::Release::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let artists = release
            .find_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        Ok(Some(Release::from_entity(release, artists)))
    }

    /// Creates a release and credits its artists.
    ///
    /// # Returns
    /// - `Ok(Release)` - The created release
    /// - `Err(DbErr)` - Constraint violation (duplicate catalog number, unknown artist)
    ///   or other database error; nothing is written
    pub async fn create(&self, params: ReleaseParams) -> Result<Release, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let release = entity::release::ActiveModel {
            title: ActiveValue::Set(params.title),
            released_on: ActiveValue::Set(params.released_on),
            cover_art: ActiveValue::Set(params.cover_art),
            catalog_number: ActiveValue::Set(params.catalog_number),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::link_artists(&txn, release.id, &params.artist_ids).await?;
        txn.commit().await?;

        self.find_by_id(release.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Release not found after creation".to_string()))
    }

    /// Replaces every field of a release and its artist credits.
    ///
    /// # Returns
    /// - `Ok(Some(Release))` - The updated release
    /// - `Ok(None)` - No release with that ID
    /// - `Err(DbErr)` - Constraint violation or other database error; nothing is written
    pub async fn update(&self, id: i32, params: ReleaseParams) -> Result<Option<Release>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Release::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut release: entity::release::ActiveModel = existing.into();
        release.title = ActiveValue::Set(params.title);
        release.released_on = ActiveValue::Set(params.released_on);
        release.cover_art = ActiveValue::Set(params.cover_art);
        release.catalog_number = ActiveValue::Set(params.catalog_number);
        release.description = ActiveValue::Set(params.description);
        release.updated_at = ActiveValue::Set(Utc::now());
        release.update(&txn).await?;

        entity::prelude::ReleaseArtist::delete_many()
            .filter(entity::release_artist::Column::ReleaseId.eq(id))
            .exec(&txn)
            .await?;
        Self::link_artists(&txn, id, &params.artist_ids).await?;
        txn.commit().await?;

        self.find_by_id(id).await
    }

    /// Deletes a release. Credits cascade and tracks are detached.
    ///
    /// # Returns
    /// - `Ok(true)` - Release deleted
    /// - `Ok(false)` - No release with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Release::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Release::find().count(self.db).await
    }

    async fn link_artists(
        txn: &DatabaseTransaction,
        release_id: i32,
        artist_ids: &[i32],
    ) -> Result<(), DbErr> {
        if artist_ids.is_empty() {
            return Ok(());
        }

        let links = artist_ids
            .iter()
            .map(|artist_id| entity::release_artist::ActiveModel {
                release_id: ActiveValue::Set(release_id),
                artist_id: ActiveValue::Set(*artist_id),
            });
        entity::prelude::ReleaseArtist::insert_many(links)
            .exec(txn)
            .await?;

        Ok(())
    }

    /// Loads credited artists for several releases in one query.
    async fn artists_by_release(
        &self,
        release_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::artist::Model>>, DbErr> {
        if release_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ReleaseArtist::find()
            .filter(entity::release_artist::Column::ReleaseId.is_in(release_ids))
            .find_also_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        let mut by_release: HashMap<i32, Vec<entity::artist::Model>> = HashMap::new();
        for (link, artist) in rows {
            if let Some(artist) = artist {
                by_release.entry(link.release_id).or_default().push(artist);
            }
        }

        Ok(by_release)
    }
}
