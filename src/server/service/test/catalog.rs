use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::service::ServiceError,
    model::{release::ReleaseParams, track::TrackParams},
    service::{release::ReleaseService, track::TrackService},
};

use super::service_error;

fn release_params(title: &str, catalog_number: Option<&str>) -> ReleaseParams {
    ReleaseParams {
        title: title.to_string(),
        released_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        cover_art: "https://cdn.example.com/cover.jpg".to_string(),
        catalog_number: catalog_number.map(str::to_string),
        description: None,
        artist_ids: Vec::new(),
    }
}

/// Tests that a duplicate catalog number is attributed to its field.
///
/// Expected: Conflict on `catalog_number` with the release-specific message
#[tokio::test]
async fn duplicate_catalog_number_is_field_conflict() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ReleaseService::new(db);

    service
        .create(release_params("First", Some("LBL-001")))
        .await
        .unwrap();
    let err = service_error(service.create(release_params("Second", Some("LBL-001"))).await);

    assert_eq!(
        err,
        ServiceError::Conflict {
            field: Some("catalog_number".to_string()),
            message: "A release with this catalog number already exists".to_string(),
        }
    );
}

/// Tests that missing releases are reported as not found.
///
/// Expected: NotFound for get, update, and delete
#[tokio::test]
async fn missing_release_is_not_found() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ReleaseService::new(db);

    assert!(matches!(
        service_error(service.get_by_id(404).await),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service_error(service.update(404, release_params("Gone", None)).await),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service_error(service.delete(404).await),
        ServiceError::NotFound(_)
    ));
}

/// Tests that a track pointing at a missing release is a validation error.
///
/// Expected: Validation on `release_id`
#[tokio::test]
async fn track_with_missing_release_is_rejected() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrackService::new(db)
        .create(TrackParams {
            title: "Orphan".to_string(),
            duration_seconds: 180,
            track_number: Some(1),
            release_id: Some(999),
            audio_url: None,
        })
        .await;

    assert_eq!(
        service_error(result),
        ServiceError::validation("release_id", "Release does not exist")
    );
}

/// Tests filtering tracks by release through the service.
///
/// Expected: Only the release's tracks, with `has_more` false
#[tokio::test]
async fn lists_tracks_of_release() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let release = factory::release::create_release(db).await.unwrap();
    factory::track::TrackFactory::new(db)
        .on_release(release.id, 1)
        .build()
        .await
        .unwrap();
    factory::track::create_track(db).await.unwrap();

    let page = TrackService::new(db)
        .get_paginated(Default::default(), Some(release.id))
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].release_id, Some(release.id));
    assert!(!page.has_more());
}
