use anyhow::{Context, Result};
use std::{fs::File, sync::Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file`, filtered by `RUST_LOG` (default `info`)
///
/// Without a file nothing is installed: the console owns the terminal and
/// stray log lines would tear the picture.
pub fn init(log_file: Option<&str>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    info!(version = env!("CARGO_PKG_VERSION"), "logging to {path}");
    Ok(())
}
