use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Release::Table)
                    .if_not_exists()
                    .col(pk_auto(Release::Id))
                    .col(string(Release::Title))
                    .col(date(Release::ReleasedOn))
                    .col(string(Release::CoverArt))
                    .col(string_null(Release::CatalogNumber).unique_key())
                    .col(text_null(Release::Description))
                    .col(timestamp_with_time_zone(Release::CreatedAt))
                    .col(timestamp_with_time_zone(Release::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_release_released_on")
                    .table(Release::Table)
                    .col(Release::ReleasedOn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Release::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Release {
    Table,
    Id,
    Title,
    ReleasedOn,
    CoverArt,
    CatalogNumber,
    Description,
    CreatedAt,
    UpdatedAt,
}
