//! specgrep - device spec collection over adb.
//!
//! Runs the fixed category pipeline against the attached device and writes
//! per-category JSON plus a styled workbook report into a per-run results
//! folder.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use specgrep::adb::AdbChannel;
use specgrep::config::Config;
use specgrep::pipeline::{self, Pipeline};
use specgrep_common::fsutil;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "specgrep")]
#[command(about = "Collect device configuration specs over adb into JSON and workbook reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the adb binary
    #[arg(long)]
    adb: Option<String>,

    /// Device serial to target (defaults to the single attached device)
    #[arg(long)]
    serial: Option<String>,

    /// Base directory for per-run results folders
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(adb) = cli.adb {
        config.adb_path = adb;
    }
    if let Some(serial) = cli.serial {
        config.serial = Some(serial);
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = log_dir;
    }

    let device = AdbChannel::new(config.adb_path.clone(), config.serial.clone());
    let serial = device.serial_no()?;

    let results_dir = fsutil::results_dir(
        &config.log_dir,
        &pipeline::run_name(Local::now()),
        &serial,
    )?;
    init_logging(&results_dir)?;

    info!(
        "specgrep v{} starting for device {}",
        env!("CARGO_PKG_VERSION"),
        serial
    );

    let pipeline = Pipeline::new(&device, serial.as_str(), results_dir)?;
    let out = pipeline.run()?;
    info!("results written to {}", out.display());

    Ok(())
}

/// Console layer honoring RUST_LOG, plus a plain-format file layer writing
/// the console log the pipeline rotates per category.
fn init_logging(results_dir: &Path) -> Result<()> {
    let log_file = File::create(results_dir.join(pipeline::CONSOLE_LOG))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}
