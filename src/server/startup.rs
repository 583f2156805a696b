//! Initialization of logging, database, sessions, and shared services.

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::Key, service::SignedCookie, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, overlay::OverlayError, AppError},
    overlay::OverlayRenderer,
    service::admin::code::{AdminCodeService, ADMIN_CODE_TTL_SECONDS},
};

const DEFAULT_LOG_FILTER: &str = "record_label=info,tower_http=info";

/// Sessions expire after a week without requests.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrated");

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Cookies are signed with `SESSION_SECRET` and only sent over HTTPS outside development.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to apply to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
/// - `Err(AppError::ConfigErr)` - `SESSION_SECRET` is not a usable signing key
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(!config.environment.is_development())
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(key))
}

/// Builds the HTTP client used for the CDN API.
///
/// Redirects are disabled so requests cannot be bounced to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Loads the banner overlay font from `OVERLAY_FONT_PATH`.
///
/// Without a configured font the server still starts, but banners with images are rejected.
pub fn load_overlay_renderer(config: &Config) -> Result<OverlayRenderer, AppError> {
    let Some(path) = &config.overlay_font_path else {
        tracing::warn!("OVERLAY_FONT_PATH is not set, banner images are disabled");
        return Ok(OverlayRenderer::default());
    };

    let bytes = std::fs::read(path).map_err(|e| {
        OverlayError::FontUnavailable(format!("failed to read {}: {}", path.display(), e))
    })?;

    Ok(OverlayRenderer::from_font_bytes(bytes)?)
}

/// Generates and logs an admin code when no admin account exists.
///
/// The code is valid once, for ten minutes, and is entered on the sign-up form.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;
    tracing::info!(
        "No admin account exists. Sign up at {}/auth/signup with admin code {} within {} minutes",
        config.app_url.trim_end_matches('/'),
        code,
        ADMIN_CODE_TTL_SECONDS / 60
    );

    Ok(())
}

/// Waits for Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
