// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # View Controllers
//!
//! Each view controller owns one view's fetch lifecycle and rendered state.
//! Controllers are plain state machines: they hold a [`ViewState`], drive it
//! through the ride client, and render it to text. No state is shared
//! between controllers and nothing survives the process.

pub mod detail;
pub mod list;

pub use detail::DetailController;
pub use list::ListController;

/// Lifecycle of one view's data.
///
/// A backend with zero rides lands in `Empty`; a backend that could not be
/// reached or answered non-success lands in `Failed`. The two render
/// differently.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// Fetch succeeded with data to show
    Loaded(T),
    /// Fetch succeeded but there is nothing to show
    Empty,
    /// Fetch failed; the reason is what gets rendered
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The loaded value, if this state carries one.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Single-slot guard for the Download action.
///
/// A second download started while one is in flight is rejected instead of
/// issuing overlapping report-generation requests.
#[derive(Debug, Default)]
pub struct DownloadGate {
    in_flight: bool,
}

impl DownloadGate {
    /// Claim the gate; `false` means a download is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Format a backend timestamp for display, falling back to the raw string
/// when it is not a recognizable date.
pub(crate) fn format_ride_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    // start_date_local comes without an offset
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_rejects_overlapping_downloads() {
        let mut gate = DownloadGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn date_formatting_handles_both_backend_shapes() {
        assert_eq!(
            format_ride_date("2024-06-01T08:00:00Z"),
            "2024-06-01 08:00"
        );
        assert_eq!(format_ride_date("2024-06-01T10:00:00"), "2024-06-01 10:00");
        assert_eq!(format_ride_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn view_state_loaded_accessor() {
        let state: ViewState<u32> = ViewState::Loaded(7);
        assert_eq!(state.loaded(), Some(&7));
        assert!(ViewState::<u32>::Empty.loaded().is_none());
    }
}
