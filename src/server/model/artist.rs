//! Artist domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::artist::{ArtistDto, ArtistInputDto, ArtistSummaryDto, PaginatedArtistsDto},
    server::{error::service::ServiceError, model::page::Page, util::validate::validate_input},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artist {
    pub fn from_entity(entity: entity::artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            bio: entity.bio,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ArtistDto {
        ArtistDto {
            id: self.id,
            name: self.name,
            bio: self.bio,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Artist> {
    pub fn into_dto(self) -> PaginatedArtistsDto {
        let has_more = self.has_more();
        PaginatedArtistsDto {
            artists: self.items.into_iter().map(Artist::into_dto).collect(),
            count: self.count,
            has_more,
        }
    }
}

/// Artist reference embedded in releases, groups, and featured entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
}

impl ArtistSummary {
    pub fn from_entity(entity: entity::artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
        }
    }

    pub fn into_dto(self) -> ArtistSummaryDto {
        ArtistSummaryDto {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
        }
    }
}

/// Validated fields for creating or updating an artist.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistParams {
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

impl ArtistParams {
    /// Validates the request body and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(ArtistParams)` - Input is valid
    /// - `Err(ServiceError::Validation)` - First failing field in form order
    pub fn try_from_dto(dto: ArtistInputDto) -> Result<Self, ServiceError> {
        validate_input(&dto, ArtistInputDto::FIELDS)?;

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            bio: dto.bio,
            image_url: dto.image_url,
        })
    }
}
