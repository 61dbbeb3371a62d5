//! Memory-mapped entry points working on paths.

use crate::error::{ExportError, ExportResult};
use crate::exporter::{ExportOptions, Exporter};
use gxt_tool_gxt::{likely_gxt, parse_gxt, GxtFile};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runs `f` over the contents of the file at `path`.
fn with_mapped_file<T>(path: &Path, f: impl FnOnce(&[u8]) -> ExportResult<T>) -> ExportResult<T> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    debug!("{}: {size} bytes", path.display());
    if size == 0 {
        return f(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    f(mapping.as_slice())
}

/// Reads and parses the container at `path`.
pub fn read_gxt_file(path: &Path) -> ExportResult<GxtFile> {
    with_mapped_file(path, |data| Ok(parse_gxt(data)?))
}

/// Whether the file at `path` starts with a GXT header.
pub fn check_file(path: &Path) -> ExportResult<bool> {
    with_mapped_file(path, |data| Ok(likely_gxt(data)))
}

/// Exports every texture of the container at `path`.
///
/// # Returns
///
/// The paths of the written images, in texture/face/level order.
pub fn export_file(path: &Path, options: ExportOptions) -> ExportResult<Vec<PathBuf>> {
    let gxt = read_gxt_file(path)?;
    Exporter::new(options).export(&gxt)
}

/// Exports every indexed texture of the container at `path` once per palette.
pub fn export_palette_test_file(path: &Path, options: ExportOptions) -> ExportResult<Vec<PathBuf>> {
    let gxt = read_gxt_file(path)?;
    Exporter::new(options).export_palette_test(&gxt)
}

/// Rebuilds a container from a directory of images.
///
/// Not supported; always fails with [`ExportError::ImportNotImplemented`].
pub fn import_file(_path: &Path, _input_dir: &Path) -> ExportResult<()> {
    Err(ExportError::ImportNotImplemented)
}
