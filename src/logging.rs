//! File logging setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{HistoviewError, Result};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "debug";

/// Send debug logs to `path`, truncating it.
///
/// The terminal belongs to the UI, so logs never go to stdout or stderr.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| HistoviewError::log_file(path.to_path_buf(), e))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
