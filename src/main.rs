// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ride_dashboard::client::{decode_identifier, RideClient};
use ride_dashboard::config::Config;
use ride_dashboard::delivery::{download_report, FsReportSink};
use ride_dashboard::logging;
use ride_dashboard::views::{DetailController, ListController};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ride service base URL (overrides RIDE_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List recorded rides
    List,
    /// Show one ride's full payload
    Show {
        /// Ride identifier; percent-encoded input is accepted
        identifier: String,
    },
    /// Generate the PDF coaching report for a ride and save it
    Report {
        /// Ride identifier; percent-encoded input is accepted
        identifier: String,
        /// Directory to save the report into
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let args = Args::parse();
    let config = Config::resolve(args.api_base)?;
    let client = RideClient::new(&config);

    match args.command {
        Command::List => {
            let mut view = ListController::new();
            view.load(&client).await;
            print!("{}", view.render());
        }
        Command::Show { identifier } => {
            let identifier = decode_identifier(&identifier);
            let mut view = DetailController::new();
            view.show(&client, &identifier).await;
            print!("{}", view.render());
        }
        Command::Report { identifier, out } => {
            let identifier = decode_identifier(&identifier);
            let sink = FsReportSink::new(out.unwrap_or_else(|| config.download_dir.clone()));
            let path = download_report(&client, &sink, &identifier).await?;
            println!("Report saved to {}", path.display());
        }
    }

    Ok(())
}
