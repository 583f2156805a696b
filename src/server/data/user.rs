//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential lookups, profile and role updates, with
//! conversion between entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::contains_pattern;
use crate::server::model::{
    page::{Page, PageRequest},
    user::{CreateUserParams, Role, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Email, name, password hash, and role of the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Email already registered or other database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email.
    ///
    /// Emails are compared after lowercasing, matching how they are stored.
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - User found with the stored PHC hash
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(&self, email: &str) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(|user| {
            let hash = user.password_hash.clone();
            (User::from_entity(user), hash)
        }))
    }

    /// Gets the stored password hash for a user.
    pub async fn password_hash(&self, id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|user| user.password_hash))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether an admin bootstrap code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets a page of users ordered by email.
    ///
    /// # Arguments
    /// - `page` - Offset, limit, and optional search over name and email
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users plus the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: &PageRequest) -> Result<Page<User>, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(search) = &page.search {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Name.like(contains_pattern(search)))
                    .add(entity::user::Column::Email.like(contains_pattern(search))),
            );
        }

        let count = query.clone().count(self.db).await?;
        let users = query
            .order_by_asc(entity::user::Column::Email)
            .offset(page.skip)
            .limit(page.take)
            .all(self.db)
            .await?;

        Ok(Page {
            items: users.into_iter().map(User::from_entity).collect(),
            count,
            skip: page.skip,
        })
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn set_role(&self, id: i32, role: Role) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = existing.into();
        user.role = ActiveValue::Set(role.as_str().to_string());
        let user = user.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Updates a user's display name and email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Email taken by another account or other database error
    pub async fn update_profile(
        &self,
        id: i32,
        name: String,
        email: String,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = existing.into();
        user.name = ActiveValue::Set(name);
        user.email = ActiveValue::Set(email.to_lowercase());
        let user = user.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Replaces a user's password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash replaced
    /// - `Ok(false)` - No user with that ID
    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut user: entity::user::ActiveModel = existing.into();
        user.password_hash = ActiveValue::Set(password_hash);
        user.update(self.db).await?;

        Ok(true)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
