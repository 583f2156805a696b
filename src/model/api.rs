use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination and search parameters accepted by list endpoints.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQueryDto {
    /// Number of rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Number of rows to return (default: 20, max: 100)
    pub take: Option<u64>,
    /// Case-insensitive substring match on the entity's name or title
    pub search: Option<String>,
}

/// Track list parameters, which additionally filter by release.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TrackListQueryDto {
    /// Number of rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Number of rows to return (default: 20, max: 100)
    pub take: Option<u64>,
    /// Case-insensitive substring match on the track title
    pub search: Option<String>,
    /// Only return tracks on this release
    pub release_id: Option<i32>,
}
