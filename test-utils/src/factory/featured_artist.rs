//! Featured artist factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Features an existing artist at the given position.
///
/// # Arguments
/// - `db` - Database connection
/// - `artist_id` - ID of the artist to feature
/// - `position` - Display position, lower first
/// - `published` - Whether the entry is publicly visible
pub async fn create_featured_artist(
    db: &DatabaseConnection,
    artist_id: i32,
    position: i32,
    published: bool,
) -> Result<entity::featured_artist::Model, DbErr> {
    entity::featured_artist::ActiveModel {
        artist_id: ActiveValue::Set(artist_id),
        headline: ActiveValue::Set(format!("Featured artist {}", artist_id)),
        position: ActiveValue::Set(position),
        published: ActiveValue::Set(published),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
