//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client and settings for the CDN API
//! - Admin code service for bootstrapping the first admin
//! - Banner overlay renderer and the upload directory it writes to

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{CdnConfig, Config, Environment},
    overlay::OverlayRenderer,
    service::admin::code::AdminCodeService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `AdminCodeService` uses `Arc` for shared state
/// - `OverlayRenderer` shares its font through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, a clone of the process-wide pool in `server::db`.
    pub db: DatabaseConnection,

    /// HTTP client for the CDN API.
    ///
    /// Configured without redirects so requests only ever reach the configured host.
    pub http_client: reqwest::Client,

    pub cdn: CdnConfig,

    /// Holds the one-time code granting the admin role while no admin exists.
    pub admin_code_service: AdminCodeService,

    pub overlay: OverlayRenderer,

    /// Directory served under `/uploads`.
    pub upload_dir: PathBuf,

    pub environment: Environment,
}

impl AppState {
    /// Creates the application state from initialized dependencies and configuration.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        admin_code_service: AdminCodeService,
        overlay: OverlayRenderer,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            cdn: config.cdn.clone(),
            admin_code_service,
            overlay,
            upload_dir: config.upload_dir.clone(),
            environment: config.environment,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over `db` with no CDN, no overlay font, and a temporary upload directory.
    pub fn for_test(db: DatabaseConnection) -> Self {
        Self {
            db,
            http_client: reqwest::Client::new(),
            cdn: CdnConfig::default(),
            admin_code_service: AdminCodeService::new(),
            overlay: OverlayRenderer::default(),
            upload_dir: std::env::temp_dir().join("record-label-test-uploads"),
            environment: Environment::Development,
        }
    }
}
