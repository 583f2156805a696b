//! OpenAPI document metadata.
//!
//! Paths and schemas are collected from the `#[utoipa::path]` handlers as the router is
//! built, see `server::router`. The document is served at `/api/openapi.json` and browsed
//! through Swagger UI at `/api/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Record label API",
        description = "Catalog, accounts, notification banners, and CDN status for the label site"
    ),
    tags(
        (name = "release", description = "Releases and their credited artists"),
        (name = "track", description = "Tracks, optionally placed on a release"),
        (name = "artist", description = "Artists"),
        (name = "group", description = "Groups and their member artists"),
        (name = "featured artist", description = "Artists highlighted on the home page"),
        (name = "notification", description = "Site-wide notification banners"),
        (name = "status", description = "Database health and CDN cache status"),
        (name = "auth", description = "Sign-up, sign-in, and the current session"),
        (name = "user", description = "Profiles and user management"),
        (name = "admin", description = "Admin dashboard")
    )
)]
pub struct ApiDoc;
