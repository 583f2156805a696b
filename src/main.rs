mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, db, error::AppError, router::router, service::admin::code::AdminCodeService,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = db::init(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let overlay = startup::load_overlay_renderer(&config)?;

    let admin_code_service = AdminCodeService::new();
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let state = AppState::new(db, http_client, admin_code_service, overlay, &config);
    let app = router(state).layer(session);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e)))?;
    tracing::info!("Listening on {}", config.bind_address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await;

    db::shutdown().await;

    served.map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
