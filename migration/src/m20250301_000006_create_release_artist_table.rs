use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_artist_table::Artist, m20250301_000005_create_release_table::Release,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReleaseArtist::Table)
                    .if_not_exists()
                    .col(integer(ReleaseArtist::ReleaseId))
                    .col(integer(ReleaseArtist::ArtistId))
                    .primary_key(
                        Index::create()
                            .col(ReleaseArtist::ReleaseId)
                            .col(ReleaseArtist::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_artist_release_id")
                            .from(ReleaseArtist::Table, ReleaseArtist::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_release_artist_artist_id")
                            .from(ReleaseArtist::Table, ReleaseArtist::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReleaseArtist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReleaseArtist {
    Table,
    ReleaseId,
    ArtistId,
}
