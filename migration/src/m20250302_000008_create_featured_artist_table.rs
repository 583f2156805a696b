use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_artist_table::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeaturedArtist::Table)
                    .if_not_exists()
                    .col(pk_auto(FeaturedArtist::Id))
                    .col(integer_uniq(FeaturedArtist::ArtistId))
                    .col(string(FeaturedArtist::Headline))
                    .col(integer(FeaturedArtist::Position).default(0))
                    .col(boolean(FeaturedArtist::Published).default(false))
                    .col(timestamp_with_time_zone(FeaturedArtist::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_featured_artist_artist_id")
                            .from(FeaturedArtist::Table, FeaturedArtist::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeaturedArtist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeaturedArtist {
    Table,
    Id,
    ArtistId,
    Headline,
    Position,
    Published,
    CreatedAt,
}
