use super::*;

/// Tests that an update replaces fields and artist credits.
///
/// Expected: Ok(Some) with the new title and only the new artist
#[tokio::test]
async fn replaces_fields_and_artists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_artist = factory::artist::create_artist(db).await?;
    let new_artist = factory::artist::create_artist(db).await?;
    let release = factory::release::ReleaseFactory::new(db)
        .artist(old_artist.id)
        .build()
        .await?;

    let repo = ReleaseRepository::new(db);
    let updated = repo
        .update(release.id, params("Renamed", vec![new_artist.id]))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.artists.len(), 1);
    assert_eq!(updated.artists[0].id, new_artist.id);

    Ok(())
}

/// Tests updating a release that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_release() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReleaseRepository::new(db);

    assert!(repo.update(42, params("Ghost", vec![])).await?.is_none());

    Ok(())
}

/// Tests that deleting a release detaches its tracks and removes credits.
///
/// Expected: Ok(true), track kept with no release, no join rows left
#[tokio::test]
async fn delete_detaches_tracks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::artist::create_artist(db).await?;
    let release = factory::release::ReleaseFactory::new(db)
        .artist(artist.id)
        .build()
        .await?;
    let track = factory::track::TrackFactory::new(db)
        .on_release(release.id, 1)
        .build()
        .await?;

    let repo = ReleaseRepository::new(db);
    assert!(repo.delete(release.id).await?);
    assert!(!repo.delete(release.id).await?);

    let track = entity::prelude::Track::find_by_id(track.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(track.release_id, None);
    assert_eq!(entity::prelude::ReleaseArtist::find().count(db).await?, 0);

    Ok(())
}
