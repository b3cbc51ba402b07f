//! Reviewbot CLI
//!
//! Command-line entry point for the homework review notification bot.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use reviewbot::Config;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

#[derive(Parser)]
#[command(name = "reviewbot")]
#[command(about = "Homework review status monitoring and notification bot")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "debug")]
    log_level: Level,

    /// File that receives a copy of the log stream
    #[arg(long, default_value = "program.log")]
    log_file: PathBuf,
}

/// Log to stdout and append the same stream to the log file
fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(LevelFilter::from_level(args.log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .with_filter(LevelFilter::from_level(args.log_level)),
        )
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    tracing::debug!(
        "Parsed command line arguments: log_level={:?}, log_file={:?}",
        args.log_level,
        args.log_file
    );

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("{}", error);
            std::process::exit(1);
        }
    };

    tracing::debug!("Configuration loaded: {:?}", config);

    reviewbot::run(config).await?;

    Ok(())
}
