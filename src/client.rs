// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Ride Service Client
//!
//! HTTP client for the coaching dashboard backend. Wraps the three remote
//! operations (list rides, fetch one ride, generate a report) behind a
//! uniform contract that classifies failures into [`ClientError`].
//!
//! The client holds no mutable state between calls and never retries; a
//! response either fully succeeds or is reported as a single typed failure.

use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;
use crate::models::{RideDetail, RideSummary};

/// Failure classification for ride service calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure: no response was obtained at all.
    #[error("ride service unreachable: {0}")]
    NetworkUnreachable(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    RequestFailed { status: StatusCode },

    /// 404 on a single-resource fetch.
    #[error("ride not found")]
    NotFound,

    /// The report endpoint answered non-success; the message is the
    /// server's response body, verbatim.
    #[error("PDF generation failed: {0}")]
    GenerationFailed(String),

    /// A success response whose body could not be decoded.
    #[error("could not decode response body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// Percent-encode a ride identifier for embedding in a request path.
///
/// Identifiers are storage keys and may contain reserved characters such as
/// path separators; encoding here is what lets them round-trip intact.
pub fn encode_identifier(identifier: &str) -> String {
    urlencoding::encode(identifier).into_owned()
}

/// Decode a percent-encoded route parameter back into a lookup key.
///
/// Malformed input is passed through unchanged rather than rejected; the
/// backend will simply report such a key as not found.
pub fn decode_identifier(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Client for the ride service REST API.
pub struct RideClient {
    http: reqwest::Client,
    base: String,
}

impl RideClient {
    /// Create a client against the configured base location.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_base.clone())
    }

    /// Create a client against an explicit base URL (tests inject a mock
    /// server here).
    pub fn with_base_url(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// List all rides, in the order the server returns them.
    pub async fn list_rides(&self) -> Result<Vec<RideSummary>, ClientError> {
        let url = format!("{}/api/rides/", self.base);
        debug!(%url, "listing rides");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::NetworkUnreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::RequestFailed { status });
        }

        response.json().await.map_err(ClientError::InvalidBody)
    }

    /// Fetch the full payload for one ride.
    pub async fn get_ride(&self, identifier: &str) -> Result<RideDetail, ClientError> {
        let url = format!("{}/api/rides/{}", self.base, encode_identifier(identifier));
        debug!(%url, "fetching ride");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::NetworkUnreachable)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            return Err(ClientError::RequestFailed { status });
        }

        response.json().await.map_err(ClientError::InvalidBody)
    }

    /// Request a freshly rendered PDF coaching report for one ride.
    ///
    /// Each call triggers new rendering work server-side; nothing is cached
    /// on either end.
    pub async fn generate_report(&self, identifier: &str) -> Result<Vec<u8>, ClientError> {
        let url = format!(
            "{}/api/report/generate/{}",
            self.base,
            encode_identifier(identifier)
        );
        debug!(%url, "requesting report generation");

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(ClientError::NetworkUnreachable)?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::GenerationFailed(body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(ClientError::NetworkUnreachable)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_encoding_escapes_reserved_characters() {
        assert_eq!(encode_identifier("morning_ride.json"), "morning_ride.json");
        assert_eq!(encode_identifier("2024/06/01.json"), "2024%2F06%2F01.json");
    }

    #[test]
    fn identifier_round_trips_through_route_params() {
        let original = "2024/06/01.json";
        let encoded = encode_identifier(original);
        let decoded = decode_identifier(&encoded);
        assert_eq!(decoded, original);
        // re-encoding the decoded key must give the same path segment
        assert_eq!(encode_identifier(&decoded), encoded);
    }

    #[test]
    fn decode_passes_malformed_input_through() {
        assert_eq!(decode_identifier("bad%zz"), "bad%zz");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = RideClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base, "http://localhost:8000");
    }
}
