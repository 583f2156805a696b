use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog and account totals shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub releases: u64,
    pub tracks: u64,
    pub artists: u64,
    pub groups: u64,
    pub users: u64,
}
