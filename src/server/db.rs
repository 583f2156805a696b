//! Process-wide database connection pool.
//!
//! The pool is created once by [`init`] during startup and closed by [`shutdown`] after the
//! server stops accepting connections. Request handlers receive the connection through
//! `AppState`, which holds a clone of the same pool.

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::server::{
    config::Config,
    error::AppError,
    startup::connect_to_database,
};

static POOL: OnceCell<DatabaseConnection> = OnceCell::const_new();

/// Connects to the database, applies migrations, and stores the pool.
///
/// Calling `init` again returns the existing pool without reconnecting.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Clone of the process-wide pool
/// - `Err(AppError)` - Connection or migration failure
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = POOL
        .get_or_try_init(|| connect_to_database(config))
        .await?;

    Ok(db.clone())
}

/// Closes the pool if it was initialized.
pub async fn shutdown() {
    if let Some(db) = POOL.get() {
        if let Err(err) = db.clone().close().await {
            tracing::error!("Failed to close database pool: {}", err);
        } else {
            tracing::info!("Database pool closed");
        }
    }
}
