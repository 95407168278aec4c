use std::process::ExitCode;

use anyhow::Result;
use bay_scraper::output::{render_fetch_error, render_report};
use bay_scraper::{logging, Cli, JobQuery};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();
    let cli = Cli::parse();

    let query = JobQuery::new(cli.query_parameters())?;

    match query.run().await {
        Ok(records) => {
            print!(
                "{}",
                render_report(&query.params().location, &records, cli.output_mode())
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Fetch failed: {}", e);
            print!("{}", render_fetch_error(&e));
            Ok(ExitCode::from(1))
        }
    }
}
