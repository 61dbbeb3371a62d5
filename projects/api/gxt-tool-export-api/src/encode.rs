use crate::error::{ExportError, ExportResult};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Writes an image to a file.
pub trait ImageEncoder {
    /// Extension of the files this encoder writes, without the dot.
    fn extension(&self) -> &'static str;

    /// Encodes `image` to `path`, replacing any existing file.
    fn encode(&self, image: &RgbaImage, path: &Path) -> ExportResult<()>;
}

/// PNG output through the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn encode(&self, image: &RgbaImage, path: &Path) -> ExportResult<()> {
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| ExportError::Image {
                path: path.to_path_buf(),
                source,
            })
    }
}
