use clap::{Parser, ValueEnum};
use spdlog::{Level, LevelFilter, error};
use std::process::ExitCode;

mod loader;
mod payload;
mod report;
mod source;

use crate::loader::{DASHBOARD_RESOURCE, LoadError, Loader};
use crate::report::ConsoleReporter;
use crate::source::DataClient;

/// Load the processed dashboard data and report it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL, file URL or local directory the resource is resolved against
    #[arg(long, default_value = ".")]
    source: String,

    /// Path of the dashboard document, relative to the source
    #[arg(long, default_value = DASHBOARD_RESOURCE)]
    resource: String,

    /// Pretty-print the loaded payload
    #[arg(long)]
    pretty: bool,

    /// Least severe level that is logged
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Critical,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

async fn run(args: Args) -> Result<(), LoadError> {
    let client = DataClient::new(&args.source)?;
    let loader =
        Loader::new(client, ConsoleReporter::new(args.pretty)).with_resource(args.resource);

    loader.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    spdlog::default_logger().set_level_filter(LevelFilter::MoreSevereEqual(args.log_level.into()));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Dashboard load failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
