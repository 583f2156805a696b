//! Release domain models and parameters.
//!
//! A release carries its credited artists, loaded through the `release_artist` join table
//! by the repository.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::release::{PaginatedReleasesDto, ReleaseDto, ReleaseInputDto},
    server::{
        error::service::ServiceError,
        model::{artist::ArtistSummary, page::Page},
        util::validate::{dedup_ids, validate_input},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: i32,
    pub title: String,
    pub released_on: NaiveDate,
    pub cover_art: String,
    pub catalog_number: Option<String>,
    pub description: Option<String>,
    /// Credited artists ordered by name.
    pub artists: Vec<ArtistSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Release {
    /// Converts an entity and its credited artists into the domain model.
    ///
    /// # Arguments
    /// - `entity` - The release row
    /// - `artists` - Artist rows linked through `release_artist`
    pub fn from_entity(entity: entity::release::Model, artists: Vec<entity::artist::Model>) -> Self {
        let mut artists: Vec<ArtistSummary> =
            artists.into_iter().map(ArtistSummary::from_entity).collect();
        artists.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            id: entity.id,
            title: entity.title,
            released_on: entity.released_on,
            cover_art: entity.cover_art,
            catalog_number: entity.catalog_number,
            description: entity.description,
            artists,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReleaseDto {
        ReleaseDto {
            id: self.id,
            title: self.title,
            released_on: self.released_on,
            cover_art: self.cover_art,
            catalog_number: self.catalog_number,
            description: self.description,
            artists: self.artists.into_iter().map(ArtistSummary::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Release> {
    pub fn into_dto(self) -> PaginatedReleasesDto {
        let has_more = self.has_more();
        PaginatedReleasesDto {
            releases: self.items.into_iter().map(Release::into_dto).collect(),
            count: self.count,
            has_more,
        }
    }
}

/// Validated fields for creating or fully updating a release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseParams {
    pub title: String,
    pub released_on: NaiveDate,
    pub cover_art: String,
    pub catalog_number: Option<String>,
    pub description: Option<String>,
    /// Distinct artist IDs to credit.
    pub artist_ids: Vec<i32>,
}

impl ReleaseParams {
    /// Validates the request body and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(ReleaseParams)` - Input is valid
    /// - `Err(ServiceError::Validation)` - First failing field in form order, or an
    ///   unparseable release date
    pub fn try_from_dto(dto: ReleaseInputDto) -> Result<Self, ServiceError> {
        validate_input(&dto, ReleaseInputDto::FIELDS)?;

        let released_on = dto.released_on.unwrap_or_default();
        let released_on = NaiveDate::parse_from_str(&released_on, "%Y-%m-%d").map_err(|_| {
            ServiceError::validation("released_on", "Release date must be a valid date (YYYY-MM-DD)")
        })?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            released_on,
            cover_art: dto.cover_art.unwrap_or_default(),
            catalog_number: dto.catalog_number,
            description: dto.description,
            artist_ids: dedup_ids(dto.artist_ids),
        })
    }
}
