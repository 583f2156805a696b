use crate::server::{
    data::group::GroupRepository,
    model::{group::GroupParams, page::PageRequest},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a group with members and replacing them on update.
///
/// Expected: Ok with two members after create and one after update
#[tokio::test]
async fn creates_and_replaces_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::artist::create_artist(db).await?;
    let b = factory::artist::create_artist(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(GroupParams {
            name: "The Tides".to_string(),
            description: None,
            image_url: None,
            member_ids: vec![a.id, b.id],
        })
        .await?;
    assert_eq!(group.members.len(), 2);

    let updated = repo
        .update(
            group.id,
            GroupParams {
                name: "The Tides".to_string(),
                description: Some("Duo turned solo".to_string()),
                image_url: None,
                member_ids: vec![b.id],
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.members.len(), 1);
    assert_eq!(updated.members[0].id, b.id);

    Ok(())
}

/// Tests listing groups with their members.
///
/// Expected: Ok with one group carrying its member
#[tokio::test]
async fn lists_groups_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::artist::create_artist(db).await?;
    factory::group::GroupFactory::new(db)
        .member(artist.id)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let page = repo.get_paginated(&PageRequest::default()).await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].members[0].id, artist.id);

    Ok(())
}
