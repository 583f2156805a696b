use super::*;

/// Tests creating a release credited to two artists.
///
/// Verifies that the release row and both join rows are written and that the returned
/// release lists its artists ordered by name.
///
/// Expected: Ok with release and two credited artists
#[tokio::test]
async fn creates_release_with_artists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zed = factory::artist::ArtistFactory::new(db).name("Zed").build().await?;
    let ana = factory::artist::ArtistFactory::new(db).name("Ana").build().await?;

    let repo = ReleaseRepository::new(db);
    let release = repo
        .create(params("Split Single", vec![zed.id, ana.id]))
        .await?;

    assert_eq!(release.title, "Split Single");
    let names: Vec<_> = release.artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Zed"]);

    let links = entity::prelude::ReleaseArtist::find().count(db).await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests that crediting an unknown artist writes nothing.
///
/// Expected: Err and no release row
#[tokio::test]
async fn rolls_back_on_unknown_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReleaseRepository::new(db);
    let result = repo.create(params("Orphan", vec![999])).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Release::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a duplicate catalog number is rejected by the database.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_catalog_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::release::ReleaseFactory::new(db)
        .catalog_number("REC-001")
        .build()
        .await?;

    let repo = ReleaseRepository::new(db);
    let mut duplicate = params("Second", vec![]);
    duplicate.catalog_number = Some("REC-001".to_string());

    assert!(repo.create(duplicate).await.is_err());

    Ok(())
}
