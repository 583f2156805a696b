//! CDN cache invalidation through the CDN HTTP API.
//!
//! The API lists invalidations of a distribution, newest first, under
//! `{CDN_API_URL}/distributions/{id}/invalidations` and creates one with a `POST` to the same
//! path. Requests are authenticated with `CDN_API_TOKEN` as a bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::health::{CdnState, CdnStatusDto},
    server::{config::CdnConfig, error::cdn::CdnError},
};

/// Paths invalidated by an admin-triggered invalidation.
const INVALIDATION_PATHS: &[&str] = &["/*"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invalidation {
    pub id: String,
    /// `"InProgress"` or `"Completed"`
    pub status: String,
    pub create_time: Option<DateTime<Utc>>,
}

impl Invalidation {
    pub fn state(&self) -> CdnState {
        match self.status.as_str() {
            "InProgress" => CdnState::Invalidating,
            "Completed" => CdnState::Ready,
            _ => CdnState::Error,
        }
    }

    pub fn into_dto(self) -> CdnStatusDto {
        CdnStatusDto {
            status: self.state(),
            invalidation_id: Some(self.id),
            created_at: self.create_time,
            error: None,
        }
    }
}

#[derive(Deserialize)]
struct InvalidationList {
    invalidations: Vec<Invalidation>,
}

#[derive(Deserialize)]
struct InvalidationCreated {
    invalidation: Invalidation,
}

#[derive(Serialize)]
struct CreateInvalidation<'a> {
    paths: &'a [&'a str],
}

/// Resolved API settings, present only when every CDN variable is set.
struct Endpoint<'a> {
    url: String,
    token: &'a str,
}

pub struct CdnService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a CdnConfig,
}

impl<'a> CdnService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a CdnConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Reports the state of the latest invalidation.
    ///
    /// Never fails. An unconfigured CDN reports `unknown`, API failures report `error`.
    pub async fn status(&self) -> CdnStatusDto {
        match self.latest_invalidation().await {
            Ok(Some(invalidation)) => invalidation.into_dto(),
            Ok(None) => CdnStatusDto {
                status: CdnState::Ready,
                invalidation_id: None,
                created_at: None,
                error: None,
            },
            Err(CdnError::NotConfigured) => CdnStatusDto {
                status: CdnState::Unknown,
                invalidation_id: None,
                created_at: None,
                error: None,
            },
            Err(err) => {
                tracing::warn!("Failed to fetch CDN status: {}", err);

                CdnStatusDto {
                    status: CdnState::Error,
                    invalidation_id: None,
                    created_at: None,
                    error: Some("Failed to fetch CDN status".to_string()),
                }
            }
        }
    }

    /// Gets the most recent invalidation, `None` if there never was one.
    pub async fn latest_invalidation(&self) -> Result<Option<Invalidation>, CdnError> {
        let endpoint = self.endpoint()?;

        let response = self
            .http_client
            .get(&endpoint.url)
            .bearer_auth(endpoint.token)
            .query(&[("limit", "1")])
            .send()
            .await?;
        let list: InvalidationList = check_status(response).await?.json().await?;

        Ok(list.invalidations.into_iter().next())
    }

    /// Invalidates every cached path of the distribution.
    pub async fn invalidate(&self) -> Result<Invalidation, CdnError> {
        let endpoint = self.endpoint()?;

        let response = self
            .http_client
            .post(&endpoint.url)
            .bearer_auth(endpoint.token)
            .json(&CreateInvalidation {
                paths: INVALIDATION_PATHS,
            })
            .send()
            .await?;
        let created: InvalidationCreated = check_status(response).await?.json().await?;

        tracing::info!("Created CDN invalidation {}", created.invalidation.id);

        Ok(created.invalidation)
    }

    fn endpoint(&self) -> Result<Endpoint<'a>, CdnError> {
        let (Some(api_url), Some(token), Some(distribution_id)) = (
            self.config.api_url.as_deref(),
            self.config.api_token.as_deref(),
            self.config.distribution_id.as_deref(),
        ) else {
            return Err(CdnError::NotConfigured);
        };

        Ok(Endpoint {
            url: format!(
                "{}/distributions/{}/invalidations",
                api_url.trim_end_matches('/'),
                distribution_id
            ),
            token,
        })
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CdnError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CdnError::Status {
        status: status.as_u16(),
        body,
    })
}
