// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures for rides served by the coaching dashboard backend.
//!
//! ## Design Principles
//!
//! - **Backend shaped**: fields mirror what the ride service actually sends;
//!   everything beyond the identifier is optional.
//! - **Opaque telemetry**: the full ride payload is carried verbatim and
//!   never reinterpreted, only displayed.
//!
//! ## Core Models
//!
//! - [`RideSummary`]: one row of the ride listing
//! - [`RideDetail`]: the full payload for a single ride

use serde::{Deserialize, Serialize};

/// One recorded ride as returned by the list endpoint.
///
/// The `path` field is the unique identifier for the ride: it keys every
/// subsequent lookup and is the route parameter for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSummary {
    /// Backend storage key for this ride; unique
    pub path: String,
    /// Human-readable ride name, if the source data carried one
    #[serde(default)]
    pub name: Option<String>,
    /// Ride start timestamp as served (ISO 8601 string)
    #[serde(default)]
    pub date: Option<String>,
    /// Total distance in meters
    #[serde(default)]
    pub distance_m: Option<f64>,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<u64>,
    /// Backend-assigned id; number or string depending on source data
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// Full payload for one ride.
///
/// The telemetry/metadata structure inside is arbitrary and treated
/// opaquely; the accessors below only peek at the handful of top-level
/// fields the views render. Callers key a detail by the identifier they
/// fetched it with, never by anything inside the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideDetail {
    raw: serde_json::Value,
}

/// Date fields probed for a displayable timestamp, in preference order.
const DATE_CANDIDATES: &[&str] = &["start_date_local", "start_date", "date"];

impl RideDetail {
    pub fn new(raw: serde_json::Value) -> Self {
        Self { raw }
    }

    /// The whole payload, untouched.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Ride name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.raw
            .get("name")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// First non-empty date candidate field.
    pub fn start_date(&self) -> Option<&str> {
        DATE_CANDIDATES
            .iter()
            .filter_map(|key| self.raw.get(key))
            .filter_map(|v| v.as_str())
            .find(|s| !s.is_empty())
    }
}
