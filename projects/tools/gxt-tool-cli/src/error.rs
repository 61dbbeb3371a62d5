use gxt_tool_export_api::ExportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("{} is not a GXT file", .0.display())]
    NotAGxtFile(PathBuf),
    /// `--dir` was omitted for an action that reads or writes a directory.
    #[error("--dir is required for {0}")]
    MissingDirectory(&'static str),
}
