//! Artist group domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::group::{GroupDto, GroupInputDto, PaginatedGroupsDto},
    server::{
        error::service::ServiceError,
        model::{artist::ArtistSummary, page::Page},
        util::validate::{dedup_ids, validate_input},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Members ordered by name.
    pub members: Vec<ArtistSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn from_entity(
        entity: entity::artist_group::Model,
        members: Vec<entity::artist::Model>,
    ) -> Self {
        let mut members: Vec<ArtistSummary> =
            members.into_iter().map(ArtistSummary::from_entity).collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image_url: entity.image_url,
            members,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            members: self.members.into_iter().map(ArtistSummary::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Group> {
    pub fn into_dto(self) -> PaginatedGroupsDto {
        let has_more = self.has_more();
        PaginatedGroupsDto {
            groups: self.items.into_iter().map(Group::into_dto).collect(),
            count: self.count,
            has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupParams {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub member_ids: Vec<i32>,
}

impl GroupParams {
    pub fn try_from_dto(dto: GroupInputDto) -> Result<Self, ServiceError> {
        validate_input(&dto, GroupInputDto::FIELDS)?;

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description,
            image_url: dto.image_url,
            member_ids: dedup_ids(dto.member_ids),
        })
    }
}
