use test_utils::builder::TestBuilder;

use crate::server::{config::Environment, service::health::HealthService};

/// Tests a healthy database ping.
///
/// Expected: `ok`/`connected` with a latency and no error
#[tokio::test]
async fn reports_connected_database() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let health = HealthService::new(db, Environment::Production).check().await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.database, "connected");
    assert!(health.latency.is_some());
    assert!(health.error.is_none());
}

/// Tests that failure detail is only exposed in development.
///
/// Expected: `error`/`disconnected`, detail present only for `Environment::Development`
#[tokio::test]
async fn hides_error_outside_development() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    db.clone().close().await.unwrap();

    let production = HealthService::new(db, Environment::Production).check().await;
    let development = HealthService::new(db, Environment::Development).check().await;

    assert_eq!(production.status, "error");
    assert_eq!(production.database, "disconnected");
    assert!(production.error.is_none());
    assert!(development.error.is_some());
}
