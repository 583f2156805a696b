pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_artist_table;
mod m20250301_000003_create_artist_group_table;
mod m20250301_000004_create_group_member_table;
mod m20250301_000005_create_release_table;
mod m20250301_000006_create_release_artist_table;
mod m20250301_000007_create_track_table;
mod m20250302_000008_create_featured_artist_table;
mod m20250302_000009_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_artist_table::Migration),
            Box::new(m20250301_000003_create_artist_group_table::Migration),
            Box::new(m20250301_000004_create_group_member_table::Migration),
            Box::new(m20250301_000005_create_release_table::Migration),
            Box::new(m20250301_000006_create_release_artist_table::Migration),
            Box::new(m20250301_000007_create_track_table::Migration),
            Box::new(m20250302_000008_create_featured_artist_table::Migration),
            Box::new(m20250302_000009_create_notification_table::Migration),
        ]
    }
}
