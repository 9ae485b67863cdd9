// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tracing setup for the dashboard client.
//!
//! Diagnostics go to stderr so rendered views on stdout stay clean. Level
//! comes from `RUST_LOG` (default `info`), format from `LOG_FORMAT`
//! (`pretty`, `compact`, or `json`).

use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
enum LogFormat {
    Json,
    Pretty,
    Compact,
}

/// Initialize the global tracing subscriber from the environment.
pub fn init() -> Result<()> {
    let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let format = match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => LogFormat::Json,
        Ok("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => {
            registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr).json())
                .init();
        }
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .init();
        }
        LogFormat::Compact => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }

    Ok(())
}
