//! Track domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::track::{PaginatedTracksDto, TrackDto, TrackInputDto},
    server::{error::service::ServiceError, model::page::Page, util::validate::validate_input},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: i32,
    pub title: String,
    pub duration_seconds: i32,
    pub track_number: Option<i32>,
    pub release_id: Option<i32>,
    /// Title of the release the track belongs to, if any.
    pub release_title: Option<String>,
    pub audio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Track {
    pub fn from_entity(
        entity: entity::track::Model,
        release: Option<entity::release::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            duration_seconds: entity.duration_seconds,
            track_number: entity.track_number,
            release_id: entity.release_id,
            release_title: release.map(|r| r.title),
            audio_url: entity.audio_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TrackDto {
        TrackDto {
            id: self.id,
            title: self.title,
            duration_seconds: self.duration_seconds,
            track_number: self.track_number,
            release_id: self.release_id,
            release_title: self.release_title,
            audio_url: self.audio_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<Track> {
    pub fn into_dto(self) -> PaginatedTracksDto {
        let has_more = self.has_more();
        PaginatedTracksDto {
            tracks: self.items.into_iter().map(Track::into_dto).collect(),
            count: self.count,
            has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackParams {
    pub title: String,
    pub duration_seconds: i32,
    pub track_number: Option<i32>,
    pub release_id: Option<i32>,
    pub audio_url: Option<String>,
}

impl TrackParams {
    /// Validates the request body and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(TrackParams)` - Input is valid
    /// - `Err(ServiceError::Validation)` - First failing field in form order
    pub fn try_from_dto(dto: TrackInputDto) -> Result<Self, ServiceError> {
        validate_input(&dto, TrackInputDto::FIELDS)?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            duration_seconds: dto.duration_seconds.unwrap_or_default(),
            track_number: dto.track_number,
            release_id: dto.release_id,
            audio_url: dto.audio_url,
        })
    }
}
