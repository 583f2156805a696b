//! HTTP route handlers.
//!
//! Handlers parse the request, call one service, and map the result to a status code and
//! JSON body. Errors convert into responses through `AppError`. Admin-only writes on the
//! public catalog routes check the role with `AuthGuard`, while handlers mounted behind
//! `require_role` receive the already-loaded `User` as an extension.

pub mod admin;
pub mod artist;
pub mod auth;
pub mod featured_artist;
pub mod group;
pub mod health;
pub mod notification;
pub mod release;
pub mod track;
pub mod user;

#[cfg(test)]
pub(crate) mod test;
