// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ride list view: one fetch on mount, one row per ride in server order.

use anyhow::Result;
use std::path::PathBuf;
use tracing::error;

use crate::client::RideClient;
use crate::delivery::{download_report, ReportSink};
use crate::models::RideSummary;
use crate::views::{format_ride_date, DownloadGate, ViewState};

/// Controller for the ride listing.
///
/// The state machine runs `Idle -> Loading -> Loaded | Empty | Failed`
/// exactly once; there is no refresh action.
pub struct ListController {
    state: ViewState<Vec<RideSummary>>,
    gate: DownloadGate,
}

impl ListController {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            gate: DownloadGate::default(),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<RideSummary>> {
        &self.state
    }

    /// Fetch the ride collection. Zero rides and a failed fetch land in
    /// different states; failures are also reported on the tracing channel.
    pub async fn load(&mut self, client: &RideClient) {
        self.state = ViewState::Loading;
        match client.list_rides().await {
            Ok(rides) if rides.is_empty() => self.state = ViewState::Empty,
            Ok(rides) => self.state = ViewState::Loaded(rides),
            Err(err) => {
                error!(error = %err, "ride listing failed");
                self.state = ViewState::Failed(err.to_string());
            }
        }
    }

    /// The per-row Analyze action: hand over the identifier the detail view
    /// should be keyed by. No network call happens here.
    pub fn analyze_target(&self, index: usize) -> Option<&str> {
        self.state
            .loaded()
            .and_then(|rides| rides.get(index))
            .map(|ride| ride.path.as_str())
    }

    /// The per-row Download action. Failures propagate to the caller for a
    /// blocking notification; overlapping downloads are rejected.
    pub async fn download(
        &mut self,
        client: &RideClient,
        sink: &dyn ReportSink,
        identifier: &str,
    ) -> Result<PathBuf> {
        if !self.gate.try_begin() {
            anyhow::bail!("a report download is already in progress");
        }
        let result = download_report(client, sink, identifier).await;
        self.gate.finish();
        result
    }

    pub fn render(&self) -> String {
        match &self.state {
            ViewState::Idle => String::new(),
            ViewState::Loading => "Loading rides...\n".to_string(),
            ViewState::Empty => "No rides found\n".to_string(),
            ViewState::Failed(reason) => format!("Could not load rides: {reason}\n"),
            ViewState::Loaded(rides) => {
                let mut out = String::from("Recent rides\n\n");
                for ride in rides {
                    out.push_str(&render_row(ride));
                }
                out
            }
        }
    }
}

impl Default for ListController {
    fn default() -> Self {
        Self::new()
    }
}

fn render_row(ride: &RideSummary) -> String {
    let name = ride
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("Untitled Ride");
    let date = ride
        .date
        .as_deref()
        .map(format_ride_date)
        .unwrap_or_else(|| "Unknown date".to_string());

    let mut row = format!("{name}\n  {date}");
    if let Some(distance) = ride.distance_m {
        row.push_str(&format!(" | {:.1} km", distance / 1000.0));
    }
    if let Some(seconds) = ride.moving_time {
        row.push_str(&format!(" | {}", format_moving_time(seconds)));
    }
    row.push_str(&format!("\n  [{}]\n", ride.path));
    row
}

fn format_moving_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(path: &str, name: Option<&str>) -> RideSummary {
        RideSummary {
            path: path.to_string(),
            name: name.map(str::to_string),
            date: None,
            distance_m: None,
            moving_time: None,
            id: None,
        }
    }

    #[test]
    fn renders_fallbacks_for_nameless_undated_ride() {
        let row = render_row(&summary("activity_1.json", None));
        assert!(row.contains("Untitled Ride"));
        assert!(row.contains("Unknown date"));
        assert!(row.contains("[activity_1.json]"));
    }

    #[test]
    fn renders_distance_and_moving_time_when_present() {
        let mut ride = summary("a.json", Some("Tempo"));
        ride.distance_m = Some(42_500.0);
        ride.moving_time = Some(5_000);
        let row = render_row(&ride);
        assert!(row.contains("42.5 km"));
        assert!(row.contains("1h 23m"));
    }

    #[test]
    fn moving_time_under_an_hour_skips_hours() {
        assert_eq!(format_moving_time(45 * 60), "45m");
        assert_eq!(format_moving_time(3 * 3600 + 5 * 60), "3h 05m");
    }

    #[test]
    fn analyze_target_indexes_loaded_rows() {
        let mut controller = ListController::new();
        controller.state = ViewState::Loaded(vec![
            summary("first.json", None),
            summary("second.json", None),
        ]);
        assert_eq!(controller.analyze_target(1), Some("second.json"));
        assert_eq!(controller.analyze_target(9), None);
    }
}
