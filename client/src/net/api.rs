//! Remote data source access.
//!
//! Client-side (hydrate): a single HTTP GET via `gloo-net`.
//! Server-side (SSR): returns [`FetchError::Unavailable`] since the publisher
//! endpoint is only queried from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to one user-facing message. The detailed variant is
//! kept for logging only; no retry is attempted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::TimelineData;
#[cfg(feature = "hydrate")]
use super::types::TIMELINE_ENDPOINT;

/// Message shown for any initial-load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load timeline data";

/// Why the timeline document could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("timeline request failed: {0}")]
    Network(String),
    #[error("timeline request returned status {0}")]
    Status(u16),
    #[error("timeline response could not be decoded: {0}")]
    Decode(String),
    #[error("timeline response carried no payload")]
    Empty,
    #[error("timeline fetch is not available outside the browser")]
    Unavailable,
}

impl FetchError {
    /// User-facing text; identical for every variant.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Decode a response body, treating a JSON `null` as an absent payload.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] for malformed JSON and [`FetchError::Empty`]
/// for a `null` document.
pub fn decode_timeline(body: &str) -> Result<TimelineData, FetchError> {
    let parsed = serde_json::from_str::<Option<TimelineData>>(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    parsed.ok_or(FetchError::Empty)
}

/// Fetch the timeline document from the publisher endpoint.
///
/// # Errors
///
/// Returns a [`FetchError`] on network failure, a non-OK status, an
/// undecodable body, or an empty payload.
pub async fn fetch_timeline() -> Result<TimelineData, FetchError> {
    let result = request_timeline().await;
    #[cfg(feature = "hydrate")]
    if let Err(e) = &result {
        log::warn!("{e}");
    }
    result
}

async fn request_timeline() -> Result<TimelineData, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TIMELINE_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        decode_timeline(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}
