// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Ride Dashboard
//!
//! Client for a cycling coaching dashboard service: list recorded rides,
//! inspect one ride's telemetry, and download generated PDF coaching
//! reports.
//!
//! ## Features
//!
//! - **Typed ride service client**: the three remote operations behind one
//!   failure taxonomy, no retries, no hidden state
//! - **View controllers**: per-view state machines (`Loading`/`Loaded`/
//!   `Empty`/`Failed`) with a stale-response guard for in-flight fetches
//! - **Report delivery**: binary artifacts saved locally under a name
//!   derived from the ride identifier
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ride_dashboard::client::RideClient;
//! use ride_dashboard::config::Config;
//! use ride_dashboard::views::ListController;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::resolve(None)?;
//!     let client = RideClient::new(&config);
//!
//!     let mut view = ListController::new();
//!     view.load(&client).await;
//!     print!("{}", view.render());
//!
//!     Ok(())
//! }
//! ```

/// HTTP client for the ride service and its error taxonomy
pub mod client;

/// Startup configuration and base-location resolution
pub mod config;

/// Report artifact delivery to the local filesystem
pub mod delivery;

/// Tracing initialization
pub mod logging;

/// Data models for ride summaries and detail payloads
pub mod models;

/// View controllers and their state machines
pub mod views;
