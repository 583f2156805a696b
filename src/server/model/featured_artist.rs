use crate::{
    model::featured_artist::{FeaturedArtistDto, FeaturedArtistInputDto},
    server::{
        error::service::ServiceError, model::artist::ArtistSummary,
        util::validate::validate_input,
    },
};

/// An artist promoted on the landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedArtist {
    pub id: i32,
    pub artist: ArtistSummary,
    pub headline: String,
    /// Ascending display order.
    pub position: i32,
    pub published: bool,
}

impl FeaturedArtist {
    pub fn from_entity(
        entity: entity::featured_artist::Model,
        artist: entity::artist::Model,
    ) -> Self {
        Self {
            id: entity.id,
            artist: ArtistSummary::from_entity(artist),
            headline: entity.headline,
            position: entity.position,
            published: entity.published,
        }
    }

    pub fn into_dto(self) -> FeaturedArtistDto {
        FeaturedArtistDto {
            id: self.id,
            artist: self.artist.into_dto(),
            headline: self.headline,
            position: self.position,
            published: self.published,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedArtistParams {
    pub artist_id: i32,
    pub headline: String,
    pub position: i32,
    pub published: bool,
}

impl FeaturedArtistParams {
    pub fn try_from_dto(dto: FeaturedArtistInputDto) -> Result<Self, ServiceError> {
        validate_input(&dto, FeaturedArtistInputDto::FIELDS)?;

        Ok(Self {
            artist_id: dto.artist_id.unwrap_or_default(),
            headline: dto.headline.unwrap_or_default(),
            position: dto.position.unwrap_or(0),
            published: dto.published,
        })
    }
}
