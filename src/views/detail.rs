// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ride detail view: fetch one ride keyed by an identifier, render its
//! payload verbatim, offer the report download.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, error};

use crate::client::{ClientError, RideClient};
use crate::delivery::{download_report, ReportSink};
use crate::models::RideDetail;
use crate::views::{format_ride_date, DownloadGate, ViewState};

/// Title shown when the ride payload carries no name.
const FALLBACK_TITLE: &str = "Ride Analysis";

/// Token tying a fetch completion to the fetch cycle that issued it.
///
/// The controller bumps its generation on every [`DetailController::begin_fetch`];
/// a completion whose token no longer matches is stale and gets discarded,
/// so the view always reflects the most recently requested identifier even
/// when responses arrive out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Controller for one ride's detail view.
///
/// Re-enters `Loading` whenever the input identifier changes.
pub struct DetailController {
    identifier: Option<String>,
    state: ViewState<RideDetail>,
    generation: u64,
    gate: DownloadGate,
}

impl DetailController {
    pub fn new() -> Self {
        Self {
            identifier: None,
            state: ViewState::Idle,
            generation: 0,
            gate: DownloadGate::default(),
        }
    }

    pub fn state(&self) -> &ViewState<RideDetail> {
        &self.state
    }

    /// The identifier this view is currently keyed by.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Start a fetch cycle for `identifier` and return its token.
    pub fn begin_fetch(&mut self, identifier: &str) -> FetchToken {
        self.generation += 1;
        self.identifier = Some(identifier.to_string());
        self.state = ViewState::Loading;
        FetchToken(self.generation)
    }

    /// Apply a fetch outcome. Outcomes from superseded fetch cycles are
    /// dropped without touching the state.
    pub fn complete_fetch(&mut self, token: FetchToken, result: Result<RideDetail, ClientError>) {
        if token != FetchToken(self.generation) {
            debug!(
                stale = token.0,
                current = self.generation,
                "discarding stale ride response"
            );
            return;
        }

        self.state = match result {
            Ok(detail) => ViewState::Loaded(detail),
            Err(ClientError::NotFound) => ViewState::Failed("Ride not found.".to_string()),
            Err(err) => {
                error!(error = %err, "ride fetch failed");
                ViewState::Failed(err.to_string())
            }
        };
    }

    /// Full fetch cycle: begin, call the service, complete.
    pub async fn show(&mut self, client: &RideClient, identifier: &str) {
        let token = self.begin_fetch(identifier);
        let result = client.get_ride(identifier).await;
        self.complete_fetch(token, result);
    }

    /// The Download action, keyed by the view's identifier. Failures
    /// propagate to the caller for a blocking notification.
    pub async fn download(
        &mut self,
        client: &RideClient,
        sink: &dyn ReportSink,
    ) -> Result<PathBuf> {
        let identifier = self
            .identifier
            .clone()
            .context("no ride selected for download")?;
        if !self.gate.try_begin() {
            anyhow::bail!("a report download is already in progress");
        }
        let result = download_report(client, sink, &identifier).await;
        self.gate.finish();
        result
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Idle | ViewState::Empty => String::new(),
            ViewState::Loading => "Loading ride...\n".to_string(),
            ViewState::Failed(reason) => format!("{reason}\n"),
            ViewState::Loaded(detail) => {
                let title = detail.name().unwrap_or(FALLBACK_TITLE);
                let subtitle = detail
                    .start_date()
                    .map(format_ride_date)
                    .unwrap_or_default();
                let dump = serde_json::to_string_pretty(detail.raw())
                    .unwrap_or_else(|_| detail.raw().to_string());

                let mut out = format!("{title}\n");
                if !subtitle.is_empty() {
                    out.push_str(&subtitle);
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&dump);
                out.push('\n');
                out
            }
        }
    }
}

impl Default for DetailController {
    fn default() -> Self {
        Self::new()
    }
}
