//! Route table.
//!
//! Routes are grouped by who may call them. Public routes are open, writes on the catalog
//! check the admin role inside the handler. Private and admin groups are wrapped with
//! `require_role`, and the route gate in front of everything redirects or rejects requests
//! to gated pages before they reach a handler.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::post,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    action,
    controller::{
        admin, artist, auth, featured_artist, group, health, notification, release, track,
        user,
    },
    docs::ApiDoc,
    middleware::{gate::route_gate, guard::require_role},
    model::{
        notification::{MAX_UPLOAD_BYTES, UPLOADS_URL_PREFIX},
        user::Role,
    },
    state::AppState,
};

/// Builds the application router over `state`.
///
/// The session layer is added by the caller, outside of the route gate.
pub fn router(state: AppState) -> Router {
    let (public, mut api_doc) = public_routes().split_for_parts();
    let (private, private_doc) = private_routes().split_for_parts();
    let (admin, admin_doc) = admin_routes().split_for_parts();
    api_doc.merge(private_doc);
    api_doc.merge(admin_doc);

    let upload_dir = state.upload_dir.clone();

    Router::new()
        .merge(public)
        .merge(require_role(private, state.clone(), Role::User))
        .merge(require_role(admin, state.clone(), Role::Admin))
        .merge(action_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api_doc))
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(upload_dir))
        .layer(from_fn(route_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(release::get_releases, release::create_release))
        .routes(routes!(
            release::get_release,
            release::update_release,
            release::delete_release
        ))
        .routes(routes!(track::get_tracks, track::create_track))
        .routes(routes!(
            track::get_track,
            track::update_track,
            track::delete_track
        ))
        .routes(routes!(artist::get_artists, artist::create_artist))
        .routes(routes!(
            artist::get_artist,
            artist::update_artist,
            artist::delete_artist
        ))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(
            group::get_group,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(featured_artist::get_featured_artists))
        .routes(routes!(notification::get_active_notification))
        .routes(routes!(health::get_health))
        .routes(routes!(health::get_cdn_status))
        .routes(routes!(auth::signup))
        .routes(routes!(auth::signin))
        .routes(routes!(auth::signout))
        .routes(routes!(auth::get_session))
}

fn private_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(user::get_profile))
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(admin::get_dashboard))
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_user_role))
        .merge(
            OpenApiRouter::new()
                .routes(routes!(
                    notification::get_notifications,
                    notification::create_notification
                ))
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .routes(routes!(notification::delete_notification))
        .routes(routes!(health::invalidate_cdn))
}

/// Form submission endpoints. These answer with a form state rather than an API error,
/// so they are left out of the OpenAPI document.
fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/actions/sign-up", post(action::auth::sign_up))
        .route("/actions/sign-in", post(action::auth::sign_in))
        .route("/actions/update-profile", post(action::profile::update_profile))
        .route("/actions/change-password", post(action::profile::change_password))
        .route("/actions/create-release", post(action::catalog::create_release))
        .route(
            "/actions/update-release/{id}",
            post(action::catalog::update_release),
        )
        .route("/actions/create-track", post(action::catalog::create_track))
        .route("/actions/create-artist", post(action::catalog::create_artist))
        .route(
            "/actions/update-artist/{id}",
            post(action::catalog::update_artist),
        )
        .route("/actions/create-group", post(action::catalog::create_group))
        .route(
            "/actions/create-featured-artist",
            post(action::catalog::create_featured_artist),
        )
        .route(
            "/actions/create-notification",
            post(action::notification::create_notification)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
