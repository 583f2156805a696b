//! SeaORM entity definitions for the record label catalog, accounts, and banners.

pub mod prelude;

pub mod artist;
pub mod artist_group;
pub mod featured_artist;
pub mod group_member;
pub mod notification;
pub mod release;
pub mod release_artist;
pub mod track;
pub mod user;
