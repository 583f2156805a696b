use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ArtistGroup::Id))
                    .col(string_uniq(ArtistGroup::Name))
                    .col(text_null(ArtistGroup::Description))
                    .col(string_null(ArtistGroup::ImageUrl))
                    .col(timestamp_with_time_zone(ArtistGroup::CreatedAt))
                    .col(timestamp_with_time_zone(ArtistGroup::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistGroup {
    Table,
    Id,
    Name,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
