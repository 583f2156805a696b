//! Group factory for creating artist groups and their memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    members: Vec<i32>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory named `"Group {id}"` with no members.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
            description: None,
            members: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an existing artist as a member of the group.
    pub fn member(mut self, artist_id: i32) -> Self {
        self.members.push(artist_id);
        self
    }

    /// Inserts the group followed by one membership row per member.
    pub async fn build(self) -> Result<entity::artist_group::Model, DbErr> {
        let now = Utc::now();
        let group = entity::artist_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for artist_id in self.members {
            entity::group_member::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                artist_id: ActiveValue::Set(artist_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(group)
    }
}

/// Creates a group without members.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::artist_group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
