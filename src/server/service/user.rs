//! User service for profile and account management.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{ChangePasswordDto, UpdateProfileDto},
    server::{
        data::user::UserRepository,
        error::{service::ServiceError, AppError},
        model::{
            page::{Page, PageRequest},
            user::{Role, User},
        },
        service::auth::USER_CONFLICTS,
        util::{
            password::{hash_password, verify_password},
            validate::validate_input,
        },
    },
};

fn not_found() -> AppError {
    ServiceError::NotFound("User not found".to_string()).into()
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageRequest) -> Result<Page<User>, AppError> {
        Ok(UserRepository::new(self.db).get_paginated(&page).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Changes the role of `target_id` on behalf of the admin `actor_id`.
    ///
    /// Admins cannot demote themselves, which keeps at least one admin around.
    ///
    /// # Arguments
    /// - `actor_id` - ID of the admin making the change
    /// - `target_id` - ID of the user whose role changes
    /// - `role` - Submitted role, `"admin"` or `"user"`
    pub async fn set_role(
        &self,
        actor_id: i32,
        target_id: i32,
        role: &str,
    ) -> Result<User, AppError> {
        let Some(role) = Role::parse(role) else {
            return Err(ServiceError::validation("role", "Role must be admin or user").into());
        };

        if actor_id == target_id && role != Role::Admin {
            return Err(
                ServiceError::validation("role", "You cannot remove your own admin role").into(),
            );
        }

        let user = UserRepository::new(self.db)
            .set_role(target_id, role)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!(
            "User {} set role of user {} to {}",
            actor_id,
            target_id,
            role.as_str()
        );

        Ok(user)
    }

    pub async fn update_profile(&self, id: i32, dto: UpdateProfileDto) -> Result<User, AppError> {
        validate_input(&dto, UpdateProfileDto::FIELDS)?;

        UserRepository::new(self.db)
            .update_profile(
                id,
                dto.name.unwrap_or_default(),
                dto.email.unwrap_or_default(),
            )
            .await
            .map_err(|e| ServiceError::classify(e, USER_CONFLICTS))?
            .ok_or_else(not_found)
    }

    /// Replaces the password after verifying the current one.
    pub async fn change_password(&self, id: i32, dto: ChangePasswordDto) -> Result<(), AppError> {
        validate_input(&dto, ChangePasswordDto::FIELDS)?;

        let repo = UserRepository::new(self.db);
        let hash = repo.password_hash(id).await?.ok_or_else(not_found)?;

        if !verify_password(&dto.current_password.unwrap_or_default(), &hash)? {
            return Err(ServiceError::validation(
                "current_password",
                "Current password is incorrect",
            )
            .into());
        }

        let new_hash = hash_password(&dto.new_password.unwrap_or_default())?;
        repo.set_password_hash(id, new_hash).await?;

        Ok(())
    }
}
