use std::path::PathBuf;

use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::notification::NotificationRepository,
    error::{overlay::OverlayError, service::ServiceError, AppError},
    model::notification::NotificationParams,
    overlay::OverlayRenderer,
    service::notification::NotificationService,
};

use super::service_error;

fn params(message: &str, active: bool) -> NotificationParams {
    NotificationParams {
        message: message.to_string(),
        secondary_message: None,
        link: None,
        active,
        created_by: None,
    }
}

fn upload_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("record-label-{}-{}", name, rand::random::<u32>()))
}

/// Tests that activating a banner deactivates the previous one.
///
/// Expected: Only the newest banner is active
#[tokio::test]
async fn only_one_banner_is_active() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let overlay = OverlayRenderer::default();
    let dir = upload_dir("active");
    let service = NotificationService::new(db, &overlay, &dir);

    service.create(params("First", true), None).await.unwrap();
    let second = service.create(params("Second", true), None).await.unwrap();

    let active = service.get_active().await.unwrap().unwrap();
    assert_eq!(active.id, second.id);
    let all = service.get_all().await.unwrap();
    assert_eq!(all.iter().filter(|n| n.active).count(), 1);
}

/// Tests that an undecodable upload is rejected before anything is stored.
///
/// Expected: ImageLoad error and no banner row
#[tokio::test]
async fn rejects_undecodable_upload() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let overlay = OverlayRenderer::default();
    let dir = upload_dir("invalid");

    let result = NotificationService::new(db, &overlay, &dir)
        .create(params("Banner", true), Some(b"definitely not a jpeg".to_vec()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::OverlayErr(OverlayError::ImageLoad(_)))
    ));
    assert!(NotificationRepository::new(db).get_all().await.unwrap().is_empty());
}

/// Tests that deleting a banner removes its stored image.
///
/// Expected: Row and file gone, second delete is NotFound
#[tokio::test]
async fn delete_removes_image() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let overlay = OverlayRenderer::default();
    let dir = upload_dir("delete");

    let relative = "notifications/banner.jpg";
    std::fs::create_dir_all(dir.join("notifications")).unwrap();
    std::fs::write(dir.join(relative), b"jpeg").unwrap();
    let notification = factory::notification::NotificationFactory::new(db)
        .image_path(relative)
        .build()
        .await
        .unwrap();

    let service = NotificationService::new(db, &overlay, &dir);
    service.delete(notification.id).await.unwrap();

    assert!(!dir.join(relative).exists());
    assert!(matches!(
        service_error(service.delete(notification.id).await),
        ServiceError::NotFound(_)
    ));

    std::fs::remove_dir_all(&dir).ok();
}
