//! Notification banner data repository for database operations.
//!
//! At most one banner is active at a time. Activating a banner deactivates the others in
//! the same transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::notification::{Notification, NotificationParams};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the active banner, the most recently created if several are flagged.
    pub async fn get_active(&self) -> Result<Option<Notification>, DbErr> {
        let notification = entity::prelude::Notification::find()
            .filter(entity::notification::Column::Active.eq(true))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .one(self.db)
            .await?;

        Ok(notification.map(Notification::from_entity))
    }

    /// Gets every banner, newest first.
    pub async fn get_all(&self) -> Result<Vec<Notification>, DbErr> {
        let notifications = entity::prelude::Notification::find()
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Creates a banner, deactivating the others when it is active.
    ///
    /// # Arguments
    /// - `params` - Validated banner fields
    /// - `image_path` - Rendered image path relative to the upload directory
    pub async fn create(
        &self,
        params: NotificationParams,
        image_path: Option<String>,
    ) -> Result<Notification, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        if params.active {
            Self::deactivate_all(&txn).await?;
        }

        let notification = entity::notification::ActiveModel {
            message: ActiveValue::Set(params.message),
            secondary_message: ActiveValue::Set(params.secondary_message),
            link: ActiveValue::Set(params.link),
            image_path: ActiveValue::Set(image_path),
            active: ActiveValue::Set(params.active),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Notification::from_entity(notification))
    }

    /// Deletes a banner.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The deleted banner, so its image can be removed
    /// - `Ok(None)` - No banner with that ID
    pub async fn delete(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(existing) = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(Notification::from_entity(existing)))
    }

    async fn deactivate_all(txn: &DatabaseTransaction) -> Result<(), DbErr> {
        entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Active, Expr::value(false))
            .col_expr(entity::notification::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::notification::Column::Active.eq(true))
            .exec(txn)
            .await?;

        Ok(())
    }
}
