use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(text(Notification::Message))
                    .col(text_null(Notification::SecondaryMessage))
                    .col(string_null(Notification::Link))
                    .col(string_null(Notification::ImagePath))
                    .col(boolean(Notification::Active).default(false))
                    .col(integer_null(Notification::CreatedBy))
                    .col(timestamp_with_time_zone(Notification::CreatedAt))
                    .col(timestamp_with_time_zone(Notification::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_created_by")
                            .from(Notification::Table, Notification::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    Message,
    SecondaryMessage,
    Link,
    ImagePath,
    Active,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
