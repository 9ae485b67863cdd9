// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Startup configuration for the dashboard client.
//!
//! The ride service base location is resolved exactly once, from a ranked
//! set of sources, and then passed by reference to the client; it is never
//! re-resolved mid-session:
//!
//! 1. explicit override (the `--api-base` flag)
//! 2. `RIDE_API_BASE` environment variable (per-deployment default,
//!    loadable from a `.env` file)
//! 3. hardcoded local-development fallback

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Base URL used when nothing else is configured (local backend).
const LOCAL_API_BASE: &str = "http://127.0.0.1:8000";

/// Resolved process-wide configuration, read-only after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ride service base URL, without trailing slash
    pub api_base: String,
    /// Directory report artifacts are delivered into
    pub download_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the override flag and the environment.
    pub fn resolve(api_base_override: Option<String>) -> Result<Self> {
        dotenv::dotenv().ok();

        let api_base = resolve_api_base(api_base_override, env::var("RIDE_API_BASE").ok())?;
        let download_dir = env::var("RIDE_DOWNLOAD_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        info!(
            api_base = %api_base,
            download_dir = %download_dir.display(),
            "configuration resolved"
        );

        Ok(Self {
            api_base,
            download_dir,
        })
    }
}

/// Apply the precedence chain and validate the winning value.
fn resolve_api_base(explicit: Option<String>, deployed: Option<String>) -> Result<String> {
    let raw = explicit
        .or(deployed)
        .unwrap_or_else(|| LOCAL_API_BASE.to_string());

    let url = Url::parse(&raw).with_context(|| format!("invalid ride service base URL: {raw}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("ride service base URL must be http or https: {raw}");
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let base = resolve_api_base(
            Some("https://coach.example.com".to_string()),
            Some("https://deployed.example.com".to_string()),
        )
        .unwrap();
        assert_eq!(base, "https://coach.example.com");
    }

    #[test]
    fn deployed_default_beats_local_fallback() {
        let base =
            resolve_api_base(None, Some("https://deployed.example.com/".to_string())).unwrap();
        assert_eq!(base, "https://deployed.example.com");
    }

    #[test]
    fn local_fallback_when_nothing_configured() {
        let base = resolve_api_base(None, None).unwrap();
        assert_eq!(base, LOCAL_API_BASE);
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(resolve_api_base(Some("not a url".to_string()), None).is_err());
        assert!(resolve_api_base(Some("ftp://example.com".to_string()), None).is_err());
    }
}
