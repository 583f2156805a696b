use axum::http::{Method, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{self, release::ReleaseFactory, track::TrackFactory},
};

use super::TestApp;
use crate::server::state::AppState;

/// Tests hasMore on a full first page and on the final page.
///
/// Expected: 25 releases give hasMore true for take=20 and false for skip=20
#[tokio::test]
async fn paginates_releases() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..25 {
        factory::release::create_release(db).await.unwrap();
    }
    let app = TestApp::new(AppState::for_test(db.clone()));

    let (status, first) = app.get("/api/releases?skip=0&take=20").await;
    let (_, last) = app.get("/api/releases?skip=20&take=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["count"], 25);
    assert_eq!(first["releases"].as_array().unwrap().len(), 20);
    assert_eq!(first["hasMore"], true);
    assert_eq!(last["releases"].as_array().unwrap().len(), 5);
    assert_eq!(last["hasMore"], false);
}

/// Tests the track list for a single-row result filtered by release.
///
/// Expected: only the release's track, with hasMore false
#[tokio::test]
async fn filters_tracks_by_release() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let release = factory::release::create_release(db).await.unwrap();
    let track = TrackFactory::new(db)
        .title("Opening")
        .on_release(release.id, 1)
        .build()
        .await
        .unwrap();
    factory::track::create_track(db).await.unwrap();
    let app = TestApp::new(AppState::for_test(db.clone()));

    let (status, body) = app
        .get(&format!("/api/tracks?skip=0&take=20&releaseId={}", release.id))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["hasMore"], false);
    assert_eq!(body["tracks"][0]["id"], track.id);
}

/// Tests that a release without a title is rejected before reaching the database.
///
/// Expected: 400 with "Title is required" and no release stored
#[tokio::test]
async fn rejects_release_without_title() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/releases",
            json!({ "releasedOn": "2024-05-01", "coverArt": "/covers/a.jpg" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title is required" }));
    assert_eq!(entity::prelude::Release::find().count(db).await.unwrap(), 0);
}

/// Tests track creation with the title or the duration missing.
///
/// Expected: 400 naming the missing field each time and no track stored
#[tokio::test]
async fn rejects_track_missing_required_fields() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (untitled, untitled_body) = app
        .json(Method::POST, "/api/tracks", json!({ "durationSeconds": 210 }))
        .await;
    let (no_duration, no_duration_body) = app
        .json(Method::POST, "/api/tracks", json!({ "title": "Opening" }))
        .await;

    assert_eq!(untitled, StatusCode::BAD_REQUEST);
    assert_eq!(untitled_body, json!({ "error": "Title is required" }));
    assert_eq!(no_duration, StatusCode::BAD_REQUEST);
    assert_eq!(no_duration_body, json!({ "error": "Duration is required" }));
    assert_eq!(entity::prelude::Track::find().count(db).await.unwrap(), 0);
}

/// Tests artist creation without a name.
///
/// Expected: 400 with "Name is required" and no artist stored
#[tokio::test]
async fn rejects_artist_without_name() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (status, body) = app
        .json(Method::POST, "/api/artists", json!({ "bio": "Synth duo" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));
    assert_eq!(entity::prelude::Artist::find().count(db).await.unwrap(), 0);
}

/// Tests group creation with a blank name.
///
/// Expected: 400 with "Name is required" and no group stored
#[tokio::test]
async fn rejects_group_without_name() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/groups",
            json!({ "name": "  ", "memberIds": [] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));
    assert_eq!(
        entity::prelude::ArtistGroup::find().count(db).await.unwrap(),
        0
    );
}

/// Tests release writes by anonymous visitors and regular users.
///
/// Expected: 401 without a session, 403 for a non-admin
#[tokio::test]
async fn requires_admin_for_release_writes() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    let body = json!({
        "title": "Night Drive",
        "releasedOn": "2024-05-01",
        "coverArt": "/covers/night-drive.jpg"
    });

    let (anonymous, _) = app.json(Method::POST, "/api/releases", body.clone()).await;
    app.sign_in(&user.email).await;
    let (regular, _) = app.json(Method::POST, "/api/releases", body).await;

    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(regular, StatusCode::FORBIDDEN);
}

/// Tests a duplicate catalog number.
///
/// Expected: 409 with the catalog number message
#[tokio::test]
async fn conflicts_on_catalog_number() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    ReleaseFactory::new(db)
        .catalog_number("LBL-001")
        .build()
        .await
        .unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/releases",
            json!({
                "title": "Night Drive",
                "releasedOn": "2024-05-01",
                "coverArt": "/covers/night-drive.jpg",
                "catalogNumber": "LBL-001"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "A release with this catalog number already exists"
    );
}

/// Tests the create, read, delete cycle of an artist.
///
/// Expected: 201 on create, 204 on delete, then 404
#[tokio::test]
async fn creates_and_deletes_artist() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (created, artist) = app
        .json(Method::POST, "/api/artists", json!({ "name": "Mira Vale" }))
        .await;
    let path = format!("/api/artists/{}", artist["id"]);
    let (fetched, _) = app.get(&path).await;
    let (deleted, _) = app.json(Method::DELETE, &path, json!({})).await;
    let (missing, body) = app.get(&path).await;

    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(artist["name"], "Mira Vale");
    assert_eq!(fetched, StatusCode::OK);
    assert_eq!(deleted, StatusCode::NO_CONTENT);
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Artist not found");
}

/// Tests that a group crediting a missing artist is rejected.
///
/// Expected: 400 naming the missing member
#[tokio::test]
async fn rejects_group_with_missing_member() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let mut app = TestApp::new(AppState::for_test(db.clone()));
    app.sign_in(&admin.email).await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/groups",
            json!({ "name": "Night Shift", "memberIds": [999] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A member artist does not exist");
}

/// Tests that only published featured artists are listed, by position.
#[tokio::test]
async fn lists_published_featured_artists() {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::artist::create_artist(db).await.unwrap();
    let second = factory::artist::create_artist(db).await.unwrap();
    let hidden = factory::artist::create_artist(db).await.unwrap();
    factory::featured_artist::create_featured_artist(db, second.id, 2, true)
        .await
        .unwrap();
    factory::featured_artist::create_featured_artist(db, first.id, 1, true)
        .await
        .unwrap();
    factory::featured_artist::create_featured_artist(db, hidden.id, 0, false)
        .await
        .unwrap();
    let app = TestApp::new(AppState::for_test(db.clone()));

    let (status, body) = app.get("/api/featured-artists").await;

    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["artist"]["id"].as_i64().unwrap())
        .collect();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids, vec![first.id as i64, second.id as i64]);
}
