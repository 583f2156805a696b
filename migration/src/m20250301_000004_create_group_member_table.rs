use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_artist_table::Artist,
    m20250301_000003_create_artist_group_table::ArtistGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupMember::Table)
                    .if_not_exists()
                    .col(integer(GroupMember::GroupId))
                    .col(integer(GroupMember::ArtistId))
                    .primary_key(
                        Index::create()
                            .col(GroupMember::GroupId)
                            .col(GroupMember::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_member_group_id")
                            .from(GroupMember::Table, GroupMember::GroupId)
                            .to(ArtistGroup::Table, ArtistGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_member_artist_id")
                            .from(GroupMember::Table, GroupMember::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupMember {
    Table,
    GroupId,
    ArtistId,
}
