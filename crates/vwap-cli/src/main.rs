//! # vwap-cli
//!
//! Reconstructs time-bucketed, per-symbol VWAP from a NASDAQ TotalView-ITCH
//! 5.0 feed and writes a wide CSV of running VWAPs.
//!
//! # Usage
//!
//! ```bash
//! vwap-cli feed.itch.gz --time_from 09:30 --time_to 16:00 --granularity 3600s
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use vwap_core::config::RunConfig;

/// Reconstruct time-bucketed VWAP from a NASDAQ TotalView-ITCH 5.0 feed.
#[derive(Parser)]
#[command(name = "vwap-cli", about = "ITCH 5.0 VWAP reconstruction")]
struct Cli {
    /// Path to the ITCH input file (plain or gzip-compressed).
    file_name: PathBuf,

    /// Start of the intraday window, `HH:MM`.
    #[arg(long = "time_from", default_value = "09:30")]
    time_from: String,

    /// End of the intraday window, `HH:MM` (exclusive).
    #[arg(long = "time_to", default_value = "16:00")]
    time_to: String,

    /// Bucket width, `<number><unit?>`; unit in {ns, us, ms, s}, default seconds.
    #[arg(long, default_value = "3600s")]
    granularity: String,

    /// Restrict output to a single ticker.
    #[arg(long)]
    ticker: Option<String>,

    /// Output directory for the CSV, created if it does not exist.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    vwap_core::logging::init_logging(&cli.log_level, cli.log_dir.as_deref(), "vwap-cli");

    info!(
        file = %cli.file_name.display(),
        time_from = %cli.time_from,
        time_to = %cli.time_to,
        granularity = %cli.granularity,
        "vwap-cli starting"
    );

    match run(&cli) {
        Ok(out_path) => {
            info!(output = %out_path.display(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            // The engine only ever raises `VwapError`s; anyhow is the boundary
            // type `?` converts through, but the exit code still comes from
            // the underlying domain error when one is present.
            let code = err
                .downcast_ref::<vwap_core::error::VwapError>()
                .map(|e| e.exit_code())
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let config = RunConfig::parse(&cli.time_from, &cli.time_to, &cli.granularity)?;

    std::fs::create_dir_all(&cli.output_dir)
        .map_err(|source| vwap_core::error::VwapError::Io { path: cli.output_dir.clone(), source })?;

    let out_path =
        vwap_engine::driver::run(&cli.file_name, &cli.output_dir, &config, cli.ticker.as_deref())?;
    Ok(out_path)
}
