use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::group::GroupRepository,
    error::{
        service::{ConflictRule, ServiceError},
        AppError,
    },
    model::{
        group::{Group, GroupParams},
        page::{Page, PageRequest},
    },
};

pub const GROUP_CONFLICTS: &[ConflictRule] = &[ConflictRule::new(
    "artist_group.name",
    "name",
    "A group with this name already exists",
)];

fn classify(err: DbErr) -> AppError {
    match ServiceError::classify(err, GROUP_CONFLICTS) {
        ServiceError::Validation { field: None, .. } => {
            ServiceError::validation("member_ids", "A member artist does not exist").into()
        }
        other => other.into(),
    }
}

fn not_found() -> AppError {
    ServiceError::NotFound("Group not found".to_string()).into()
}

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<Group>, AppError> {
        GroupRepository::new(self.db)
            .get_paginated(&page)
            .await
            .map_err(classify)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(id)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, params: GroupParams) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .create(params)
            .await
            .map_err(classify)
    }

    pub async fn update(&self, id: i32, params: GroupParams) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(classify)?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !GroupRepository::new(self.db)
            .delete(id)
            .await
            .map_err(classify)?
        {
            return Err(not_found());
        }

        Ok(())
    }
}
