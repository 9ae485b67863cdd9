// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Delivery of generated report artifacts.
//!
//! [`ReportSink`] is the platform capability "present a binary payload to
//! the user as a named downloadable file". The artifact only exists as an
//! in-memory buffer handed through [`download_report`]; nothing is cached
//! or retained once the sink has taken it.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::client::RideClient;

/// Derive the delivered file name for a ride's report: the identifier with
/// any `.json` suffix stripped, plus `_report.pdf`.
pub fn report_file_name(identifier: &str) -> String {
    let base = identifier.strip_suffix(".json").unwrap_or(identifier);
    format!("{base}_report.pdf")
}

/// Capability to hand a binary artifact to the user under a given name.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver `payload` as a file named `file_name`, returning where it
    /// landed.
    async fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf>;
}

/// Sink that writes artifacts into a target directory.
pub struct FsReportSink {
    dir: PathBuf,
}

impl FsReportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ReportSink for FsReportSink {
    async fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf> {
        // identifiers are storage keys and may carry separators; the
        // delivered name must stay a single path component
        let file_name = file_name.replace(['/', '\\'], "_");

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("could not create {}", self.dir.display()))?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, payload)
            .await
            .with_context(|| format!("could not write {}", path.display()))?;

        info!(path = %path.display(), bytes = payload.len(), "report saved");
        Ok(path)
    }
}

/// The Download action shared by the list and detail views: generate the
/// report for `identifier`, then deliver it under its derived name.
pub async fn download_report(
    client: &RideClient,
    sink: &dyn ReportSink,
    identifier: &str,
) -> Result<PathBuf> {
    let payload = client.generate_report(identifier).await?;
    let path = sink.deliver(&report_file_name(identifier), &payload).await?;
    Ok(path)
}
