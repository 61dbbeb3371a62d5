use crate::error::CliError;
use gxt_tool_export_api::check_file;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the log subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the `--dir` argument, failing for `action` if it was omitted.
pub fn required_dir(dir: Option<PathBuf>, action: &'static str) -> Result<PathBuf, CliError> {
    dir.ok_or(CliError::MissingDirectory(action))
}

/// Fails unless the file starts with a GXT header.
pub fn ensure_gxt(path: &Path) -> Result<(), CliError> {
    if check_file(path)? {
        Ok(())
    } else {
        Err(CliError::NotAGxtFile(path.to_path_buf()))
    }
}
