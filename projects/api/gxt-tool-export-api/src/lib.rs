#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

#[cfg(test)]
pub mod test_prelude;

/// Export errors.
pub mod error;

/// Locating face/level slices inside a texture payload.
pub mod slice;

/// Palette index expansion.
pub mod expand;

/// Morton (Z-order) to row-major reordering.
pub mod deswizzle;

/// Pixel buffer normalization to RGBA8.
pub mod transcode;

/// Image file encoding.
pub mod encode;

/// The export pipeline.
pub mod exporter;

/// Memory-mapped file input.
pub mod file_io;

pub use encode::{ImageEncoder, PngEncoder};
pub use error::{ExportError, ExportResult};
pub use exporter::{ExportOptions, Exporter};
pub use file_io::{check_file, export_file, export_palette_test_file, import_file, read_gxt_file};
pub use transcode::{PixelMetadata, PixelTranscoder, Rgba8Transcoder};
