//! Artist group data repository for database operations.
//!
//! Members are stored in the `group_member` join table and replaced wholesale on update.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::data::contains_pattern;
use crate::server::model::{
    group::{Group, GroupParams},
    page::{Page, PageRequest},
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of groups ordered by name, each with its members.
    pub async fn get_paginated(&self, page: &PageRequest) -> Result<Page<Group>, DbErr> {
        let mut query = entity::prelude::ArtistGroup::find();
        if let Some(search) = &page.search {
            query = query.filter(entity::artist_group::Column::Name.like(contains_pattern(search)));
        }

        let count = query.clone().count(self.db).await?;
        let groups = query
            .order_by_asc(entity::artist_group::Column::Name)
            .offset(page.skip)
            .limit(page.take)
            .all(self.db)
            .await?;

        let mut members = self
            .members_by_group(groups.iter().map(|g| g.id).collect())
            .await?;
        let items = groups
            .into_iter()
            .map(|group| {
                let group_members = members.remove(&group.id).unwrap_or_default();
                Group::from_entity(group, group_members)
            })
            .collect();

        Ok(Page {
            items,
            count,
            skip: page.skip,
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::ArtistGroup::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let members = group
            .find_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        Ok(Some(Group::from_entity(group, members)))
    }

    /// Creates a group with its members.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Duplicate name, unknown member, or other database error
    pub async fn create(&self, params: GroupParams) -> Result<Group, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let group = entity::artist_group::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::link_members(&txn, group.id, &params.member_ids).await?;
        txn.commit().await?;

        self.find_by_id(group.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Group not found after creation".to_string()))
    }

    /// Replaces every field of a group and its member list.
    pub async fn update(&self, id: i32, params: GroupParams) -> Result<Option<Group>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::ArtistGroup::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut group: entity::artist_group::ActiveModel = existing.into();
        group.name = ActiveValue::Set(params.name);
        group.description = ActiveValue::Set(params.description);
        group.image_url = ActiveValue::Set(params.image_url);
        group.updated_at = ActiveValue::Set(Utc::now());
        group.update(&txn).await?;

        entity::prelude::GroupMember::delete_many()
            .filter(entity::group_member::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        Self::link_members(&txn, id, &params.member_ids).await?;
        txn.commit().await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ArtistGroup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ArtistGroup::find().count(self.db).await
    }

    async fn link_members(
        txn: &DatabaseTransaction,
        group_id: i32,
        member_ids: &[i32],
    ) -> Result<(), DbErr> {
        if member_ids.is_empty() {
            return Ok(());
        }

        let links = member_ids
            .iter()
            .map(|artist_id| entity::group_member::ActiveModel {
                group_id: ActiveValue::Set(group_id),
                artist_id: ActiveValue::Set(*artist_id),
            });
        entity::prelude::GroupMember::insert_many(links)
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn members_by_group(
        &self,
        group_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::artist::Model>>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.is_in(group_ids))
            .find_also_related(entity::prelude::Artist)
            .all(self.db)
            .await?;

        let mut by_group: HashMap<i32, Vec<entity::artist::Model>> = HashMap::new();
        for (link, artist) in rows {
            if let Some(artist) = artist {
                by_group.entry(link.group_id).or_default().push(artist);
            }
        }

        Ok(by_group)
    }
}
