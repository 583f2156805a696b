use super::*;

/// Tests that a full first page reports more rows.
///
/// Creates 25 releases and requests the first 20.
///
/// Expected: Ok with 20 releases, count 25, has_more true
#[tokio::test]
async fn returns_first_page_with_more() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::release::create_release(db).await?;
    }

    let repo = ReleaseRepository::new(db);
    let page = repo.get_paginated(&PageRequest::new(Some(0), Some(20), None)).await?;

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.count, 25);
    assert!(page.has_more());

    Ok(())
}

/// Tests that the last page reports no more rows.
///
/// Expected: Ok with 5 releases, has_more false
#[tokio::test]
async fn returns_last_page_without_more() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::release::create_release(db).await?;
    }

    let repo = ReleaseRepository::new(db);
    let page = repo.get_paginated(&PageRequest::new(Some(20), Some(20), None)).await?;

    assert_eq!(page.items.len(), 5);
    assert!(!page.has_more());

    Ok(())
}

/// Tests title search and that count reflects the filter.
///
/// Expected: Ok with only the matching release and count 1
#[tokio::test]
async fn filters_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::release::ReleaseFactory::new(db)
        .title("Midnight Static")
        .build()
        .await?;
    factory::release::ReleaseFactory::new(db)
        .title("Morning Light")
        .build()
        .await?;

    let repo = ReleaseRepository::new(db);
    let page = repo
        .get_paginated(&PageRequest::new(None, None, Some("static".to_string())))
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].title, "Midnight Static");

    Ok(())
}

/// Tests that `%` and `_` in a search term match only themselves.
///
/// Expected: Ok with "100% Pure" for `%`, "Side_B" for `_`, nothing for `\`
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for title in ["100% Pure", "Side_B", "Morning Light"] {
        factory::release::ReleaseFactory::new(db)
            .title(title)
            .build()
            .await?;
    }

    let repo = ReleaseRepository::new(db);
    let percent = repo
        .get_paginated(&PageRequest::new(None, None, Some("%".to_string())))
        .await?;
    let underscore = repo
        .get_paginated(&PageRequest::new(None, None, Some("_".to_string())))
        .await?;
    let backslash = repo
        .get_paginated(&PageRequest::new(None, None, Some("\\".to_string())))
        .await?;

    assert_eq!(percent.count, 1);
    assert_eq!(percent.items[0].title, "100% Pure");
    assert_eq!(underscore.count, 1);
    assert_eq!(underscore.items[0].title, "Side_B");
    assert_eq!(backslash.count, 0);

    Ok(())
}

/// Tests that listed releases carry their artists.
///
/// Expected: Ok with the credited artist on the release
#[tokio::test]
async fn loads_artists_for_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::artist::create_artist(db).await?;
    factory::release::ReleaseFactory::new(db)
        .artist(artist.id)
        .build()
        .await?;
    factory::release::create_release(db).await?;

    let repo = ReleaseRepository::new(db);
    let page = repo.get_paginated(&PageRequest::default()).await?;

    let credited: usize = page.items.iter().map(|r| r.artists.len()).sum();
    assert_eq!(credited, 1);

    Ok(())
}
