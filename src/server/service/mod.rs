//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing rules such as "an admin cannot demote themselves"
//! - **Orchestration**: Coordinating repository calls with image rendering and the CDN
//! - **Error Classification**: Turning every `DbErr` into a `ServiceError` exactly once,
//!   using the service's own conflict rules

pub mod admin;
pub mod artist;
pub mod auth;
pub mod cdn;
pub mod featured_artist;
pub mod group;
pub mod health;
pub mod notification;
pub mod release;
pub mod track;
pub mod user;

#[cfg(test)]
mod test;
