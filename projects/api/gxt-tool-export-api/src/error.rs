//! Error types for export operations.

use gxt_tool_common::LayoutError;
use gxt_tool_gxt::GxtError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting a GXT container.
///
/// Export is fail-fast: the first error ends the run, leaving files already written in place.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The container could not be parsed.
    #[error("Failed to parse GXT container: {0}")]
    Parse(#[from] GxtError),

    /// Generic I/O failure (creating the output directory, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),

    /// The texture's format cannot be written as an image.
    #[error("Texture {texture}: format {format:#010X} cannot be exported")]
    UnsupportedExportFormat {
        /// Texture index.
        texture: usize,
        /// Format code.
        format: u32,
    },

    /// A slice reaches past the end of the texture payload.
    #[error("Texture {texture}: face {face} level {level} ends at {end}, payload is {len} bytes")]
    SliceOutOfBounds {
        /// Texture index.
        texture: usize,
        /// Face index.
        face: u32,
        /// Mip level.
        level: u32,
        /// End of the slice.
        end: u64,
        /// Payload length.
        len: usize,
    },

    /// An indexed texture has no resolvable palette.
    #[error("Texture {texture}: palette not found")]
    MissingPalette {
        /// Texture index.
        texture: usize,
    },

    /// The texture's slices could not be computed.
    #[error("Texture {texture}: {source}")]
    Layout {
        /// Texture index.
        texture: usize,
        /// Layout failure.
        source: LayoutError,
    },

    /// The pixel buffer does not match the image dimensions.
    #[error("Pixel buffer of {len} bytes does not hold a {width}x{height} image")]
    PixelBufferSize {
        /// Buffer length.
        len: usize,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },

    /// The image encoder failed.
    #[error("Failed to write {}: {source}", path.display())]
    Image {
        /// Output path.
        path: PathBuf,
        /// Encoder failure.
        source: image::ImageError,
    },

    /// Rebuilding a container from images is not supported.
    #[error("Import is not implemented")]
    ImportNotImplemented,
}
