use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::{
    model::health::HealthDto,
    server::{config::Environment, error::service::ServiceError},
};

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
    environment: Environment,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection, environment: Environment) -> Self {
        Self { db, environment }
    }

    /// Pings the database and reports the round trip.
    ///
    /// Failure detail is only included in development.
    pub async fn check(&self) -> HealthDto {
        let start = Instant::now();

        match self.db.ping().await {
            Ok(()) => HealthDto {
                status: "ok".to_string(),
                database: "connected".to_string(),
                latency: Some(start.elapsed().as_millis() as u64),
                error: None,
            },
            Err(err) => {
                let err = ServiceError::from(err);
                tracing::warn!("Health check failed: {}", err);

                HealthDto {
                    status: "error".to_string(),
                    database: "disconnected".to_string(),
                    latency: None,
                    error: self.environment.is_development().then(|| err.to_string()),
                }
            }
        }
    }
}
