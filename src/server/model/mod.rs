//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from validated request DTOs, so a parameter value is always
//! well-formed by construction.

pub mod artist;
pub mod featured_artist;
pub mod group;
pub mod notification;
pub mod page;
pub mod release;
pub mod track;
pub mod user;
