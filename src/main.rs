//! Attendance client
//!
//! Command line entry point

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use attendance_client::{cli::{self, Cli}, config::Settings, utils::logging};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Cli::parse();

    // Load configuration
    let settings = Settings::load(args.config.as_deref())?;
    settings.validate()?;

    // Initialize logging; keep the guard so the file writer flushes on exit
    let _guard = logging::init_logging(&settings.logging)?;
    debug!("Starting {}", attendance_client::info());
    info!(api_url = %settings.api_url(), "Using attendance API");

    let result = cli::run(args.command, &settings).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
