//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Errors are returned as raw `DbErr`s; classification happens in the service layer.

use sea_orm::sea_query::LikeExpr;

pub mod artist;
pub mod featured_artist;
pub mod group;
pub mod notification;
pub mod release;
pub mod track;
pub mod user;

/// `LIKE` pattern matching `search` anywhere in a column, with `%`, `_` and `\` in the
/// search term matched literally.
pub(crate) fn contains_pattern(search: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

#[cfg(test)]
mod test;
