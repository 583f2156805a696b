//! Offset pagination shared by every list endpoint.

use crate::model::api::{ListQueryDto, TrackListQueryDto};

/// Rows returned when `take` is omitted.
pub const DEFAULT_TAKE: u64 = 20;
/// Upper bound for `take`.
pub const MAX_TAKE: u64 = 100;

/// Normalized list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    /// Always within `1..=MAX_TAKE`.
    pub take: u64,
    /// Trimmed, non-empty search term.
    pub search: Option<String>,
}

impl PageRequest {
    pub fn new(skip: Option<u64>, take: Option<u64>, search: Option<String>) -> Self {
        Self {
            skip: skip.unwrap_or(0),
            take: take.unwrap_or(DEFAULT_TAKE).clamp(1, MAX_TAKE),
            search: search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn from_query(query: ListQueryDto) -> Self {
        Self::new(query.skip, query.take, query.search)
    }

    pub fn from_track_query(query: &TrackListQueryDto) -> Self {
        Self::new(query.skip, query.take, query.search.clone())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// One page of rows plus the total matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub skip: u64,
}

impl<T> Page<T> {
    /// Whether rows exist past this page: `skip + items.len() < count`.
    pub fn has_more(&self) -> bool {
        self.skip + (self.items.len() as u64) < self.count
    }
}
