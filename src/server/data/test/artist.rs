use crate::server::{
    data::artist::ArtistRepository,
    model::{artist::ArtistParams, page::PageRequest},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(name: &str) -> ArtistParams {
    ArtistParams {
        name: name.to_string(),
        bio: None,
        image_url: None,
    }
}

/// Tests that artists are listed by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn lists_artists_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::artist::ArtistFactory::new(db).name("Mira").build().await?;
    factory::artist::ArtistFactory::new(db).name("Bo").build().await?;

    let repo = ArtistRepository::new(db);
    let page = repo.get_paginated(&PageRequest::default()).await?;

    let names: Vec<_> = page.items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Mira"]);

    Ok(())
}

/// Tests that artist names are unique.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    repo.create(params("Echo")).await?;

    assert!(repo.create(params("Echo")).await.is_err());

    Ok(())
}

/// Tests updating an artist's fields.
///
/// Expected: Ok(Some) with new bio, Ok(None) for a missing artist
#[tokio::test]
async fn updates_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::artist::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let updated = repo
        .update(
            artist.id,
            ArtistParams {
                name: artist.name.clone(),
                bio: Some("Producer from Leeds".to_string()),
                image_url: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.bio.as_deref(), Some("Producer from Leeds"));
    assert!(repo.update(9999, params("Nobody")).await?.is_none());

    Ok(())
}
