use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000005_create_release_table::Release;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(pk_auto(Track::Id))
                    .col(string(Track::Title))
                    .col(integer(Track::DurationSeconds))
                    .col(integer_null(Track::TrackNumber))
                    .col(integer_null(Track::ReleaseId))
                    .col(string_null(Track::AudioUrl))
                    .col(timestamp_with_time_zone(Track::CreatedAt))
                    .col(timestamp_with_time_zone(Track::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_release_id")
                            .from(Track::Table, Track::ReleaseId)
                            .to(Release::Table, Release::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_release_id")
                    .table(Track::Table)
                    .col(Track::ReleaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Track {
    Table,
    Id,
    Title,
    DurationSeconds,
    TrackNumber,
    ReleaseId,
    AudioUrl,
    CreatedAt,
    UpdatedAt,
}
