//! flowsweep CLI — terminate every active process instance of a workflow
//! engine through its REST API.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::{error, info};

use flowsweep_engine::{EngineConnection, SweepDriver};

use crate::config::{FileConfig, Settings, DEFAULT_CONFIG_FILE};

/// Exit codes, kept stable for scripting.
const EXIT_SETUP_FAILED: u8 = 10;
const EXIT_LIST_FAILED: u8 = 20;
const EXIT_TERMINATE_FAILED: u8 = 21;

#[derive(Debug, Parser)]
#[command(
    name = "flowsweep",
    version,
    about = "Terminate every active process instance of a workflow engine via its REST API"
)]
pub struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Connect over https
    #[arg(short = 's', long)]
    pub ssl: bool,

    /// Skip TLS certificate validation
    #[arg(long)]
    pub insecure: bool,

    /// Engine host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Engine port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Base endpoint the REST API is mounted under
    #[arg(short = 'B', long, value_name = "PATH")]
    pub base_endpoint: Option<String>,

    /// Basic-auth user
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Basic-auth password
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Proxy address (host:port or URL)
    #[arg(short = 'y', long)]
    pub proxy: Option<String>,

    /// Treat the proxy as SOCKS5
    #[arg(short = 'Y', long)]
    pub socks: bool,

    /// Log verbosity 0-5 (off, error, error, warn, info, debug)
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub log_level: Option<u8>,

    /// Log destination (defaults to stderr)
    #[arg(short = 'L', long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("flowsweep: {e:#}");
            return ExitCode::from(EXIT_SETUP_FAILED);
        }
    };

    if let Err(e) = init_logging(&settings) {
        eprintln!("flowsweep: {e:#}");
        return ExitCode::from(EXIT_SETUP_FAILED);
    }

    sweep(&settings).await
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let (path, required) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    let file = FileConfig::load(&path, required)?;
    Ok(config::resolve(args, file))
}

fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let level = config::level_filter(settings.log_level);
    match &settings.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

async fn sweep(settings: &Settings) -> ExitCode {
    let connection = match EngineConnection::new(&settings.connection) {
        Ok(connection) => connection,
        Err(e) => {
            error!("could not build engine client: {e}");
            println!(
                "{} could not build engine client: {e}",
                style("✗").red().bold()
            );
            return ExitCode::from(EXIT_LIST_FAILED);
        }
    };

    let driver = SweepDriver::new(connection);
    match driver.run().await {
        Err(e) => {
            error!("listing process instances failed: {e}");
            println!(
                "{} could not list process instances: {e}",
                style("✗").red().bold()
            );
            ExitCode::from(EXIT_LIST_FAILED)
        }
        Ok(report) if report.is_clean() => {
            info!(terminated = report.terminated(), "sweep complete");
            println!(
                "{} terminated {} of {} process instances",
                style("✓").green().bold(),
                report.terminated(),
                report.total
            );
            ExitCode::SUCCESS
        }
        Ok(report) => {
            error!(
                failed = report.failed.len(),
                "sweep finished with failures"
            );
            println!(
                "{} terminated {} of {} process instances, failed: {}",
                style("✗").red().bold(),
                report.terminated(),
                report.total,
                report.failed.join(", ")
            );
            ExitCode::from(EXIT_TERMINATE_FAILED)
        }
    }
}
