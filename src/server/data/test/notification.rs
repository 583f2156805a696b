use crate::server::{
    data::notification::NotificationRepository, model::notification::NotificationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(message: &str, active: bool) -> NotificationParams {
    NotificationParams {
        message: message.to_string(),
        secondary_message: None,
        link: None,
        active,
        created_by: None,
    }
}

/// Tests that activating a new banner deactivates the previous one.
///
/// Expected: Ok with only the newest banner active
#[tokio::test]
async fn activating_banner_deactivates_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::notification::NotificationFactory::new(db)
        .active(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let new = repo.create(params("Tour dates announced", true), None).await?;

    let active = repo.get_active().await?.unwrap();
    assert_eq!(active.id, new.id);

    let all = repo.get_all().await?;
    let old = all.iter().find(|n| n.id == old.id).unwrap();
    assert!(!old.active);

    Ok(())
}

/// Tests that an inactive banner leaves the active one alone.
///
/// Expected: Ok with the original banner still active
#[tokio::test]
async fn inactive_banner_keeps_current() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let current = factory::notification::NotificationFactory::new(db)
        .active(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    repo.create(params("Draft", false), Some("notifications/draft.jpg".to_string()))
        .await?;

    assert_eq!(repo.get_active().await?.unwrap().id, current.id);

    Ok(())
}

/// Tests deleting a banner returns it for cleanup.
///
/// Expected: Ok(Some) with the image path, then Ok(None)
#[tokio::test]
async fn delete_returns_deleted_banner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let created = repo
        .create(params("Sale", false), Some("notifications/sale.jpg".to_string()))
        .await?;

    let deleted = repo.delete(created.id).await?.unwrap();
    assert_eq!(deleted.image_path.as_deref(), Some("notifications/sale.jpg"));
    assert!(repo.delete(created.id).await?.is_none());

    Ok(())
}
