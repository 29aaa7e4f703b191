//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory
//! - Release builds: cache directory (~/.cache/stargazer/ on Linux)

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("stargazer-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        stargazer_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info)
}

/// Initialize file-based logging
///
/// Returns the path of the log file.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file: {:?}", log_file))?;
    WriteLogger::init(level_from_env(), config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}
