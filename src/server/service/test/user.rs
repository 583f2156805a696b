use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::{ChangePasswordDto, UpdateProfileDto},
    server::{
        error::service::ServiceError,
        model::user::Role,
        service::user::UserService,
        util::password::verify_password,
    },
};

use super::service_error;

/// Tests that an admin cannot demote themselves.
///
/// Expected: Validation on `role`, role unchanged
#[tokio::test]
async fn admin_cannot_demote_self() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let service = UserService::new(db);

    let result = service.set_role(admin.id, admin.id, "user").await;

    assert_eq!(
        service_error(result),
        ServiceError::validation("role", "You cannot remove your own admin role")
    );
    assert_eq!(service.get_by_id(admin.id).await.unwrap().role, Role::Admin);
}

/// Tests promoting another user and rejecting unknown roles.
///
/// Expected: Target becomes admin, `"owner"` is rejected
#[tokio::test]
async fn sets_role_of_other_user() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();
    let user = factory::user::create_user(db).await.unwrap();
    let service = UserService::new(db);

    let promoted = service.set_role(admin.id, user.id, "admin").await.unwrap();
    assert_eq!(promoted.role, Role::Admin);

    assert!(matches!(
        service_error(service.set_role(admin.id, user.id, "owner").await),
        ServiceError::Validation { .. }
    ));
}

/// Tests that a profile update cannot take another account's email.
///
/// Expected: Conflict on `email`
#[tokio::test]
async fn profile_email_conflict() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await
        .unwrap();
    let user = factory::user::create_user(db).await.unwrap();

    let result = UserService::new(db)
        .update_profile(
            user.id,
            UpdateProfileDto {
                name: Some("Mira".to_string()),
                email: Some("taken@example.com".to_string()),
            },
        )
        .await;

    assert_eq!(service_error(result).field(), Some("email"));
}

/// Tests that changing the password requires the current one.
///
/// Expected: Validation on `current_password` for a wrong password, new hash stored otherwise
#[tokio::test]
async fn changes_password_after_verification() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::create_user(db).await.unwrap();
    let service = UserService::new(db);

    let dto = |current: &str| ChangePasswordDto {
        current_password: Some(current.to_string()),
        new_password: Some("brand new secret".to_string()),
        confirm_password: Some("brand new secret".to_string()),
    };

    assert_eq!(
        service_error(service.change_password(user.id, dto("not it")).await),
        ServiceError::validation("current_password", "Current password is incorrect")
    );

    service
        .change_password(user.id, dto(factory::user::DEFAULT_PASSWORD))
        .await
        .unwrap();

    let hash = crate::server::data::user::UserRepository::new(db)
        .password_hash(user.id)
        .await
        .unwrap()
        .unwrap();
    assert!(verify_password("brand new secret", &hash).unwrap());
}
