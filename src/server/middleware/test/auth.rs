use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the user is signed in,
/// exists in the database, and has the admin role.
///
/// Expected: Ok(User) with role Admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .name("Label Admin")
        .role("admin")
        .build()
        .await?;
    let admin = User::from_entity(admin);

    AuthSession::new(session)
        .set_user(&admin.to_session_user())
        .await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.name, "Label Admin");
    assert!(user.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user's ID
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    AuthSession::new(session)
        .set_user(&user.to_session_user())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that the role stored in the database wins over the session snapshot.
///
/// Verifies that a user whose session claims admin but whose account is a regular
/// user is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn uses_role_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session)
        .set_user(&session_user(user.id, Role::Admin))
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests request without a signed-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_when_not_signed_in() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests session pointing at a deleted account.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale ID
#[tokio::test]
async fn fails_when_user_no_longer_exists() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_user(&session_user(4242, Role::User))
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that signing out clears the session user.
///
/// Expected: No user after `clear`
#[tokio::test]
async fn clear_signs_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (_, session) = test.db_and_session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session.set_user(&session_user(1, Role::User)).await?;
    assert!(auth_session.get_user().await?.is_some());

    auth_session.clear().await?;
    assert_eq!(auth_session.get_user().await?, None);

    Ok(())
}
