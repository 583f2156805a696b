use thiserror::Error;

/// Failures talking to the CDN HTTP API.
#[derive(Error, Debug)]
pub enum CdnError {
    /// `CDN_API_URL`, `CDN_API_TOKEN`, or `CDN_DISTRIBUTION_ID` is not set.
    #[error("CDN is not configured")]
    NotConfigured,

    /// The request could not be sent or the body could not be read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("CDN API responded with {status}: {body}")]
    Status {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, for logging
        body: String,
    },
}
