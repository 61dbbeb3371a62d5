use crate::error::{ExportError, ExportResult};
use gxt_tool_common::ChannelOrder;
use image::RgbaImage;

/// Describes a raw pixel buffer handed to a [`PixelTranscoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMetadata {
    /// Visible width in texels.
    pub width: u32,
    /// Visible height in texels.
    pub height: u32,
    /// Texels per row in the buffer.
    pub stride_width: u32,
    /// Rows in the buffer.
    pub stride_height: u32,
    /// Memory order of the four 8-bit channels.
    pub channel_order: ChannelOrder,
}

/// Converts a raw pixel buffer into an RGBA8 image.
pub trait PixelTranscoder {
    /// Normalizes channel order and crops the padded buffer to the visible size.
    fn transcode(&self, pixels: &[u8], metadata: &PixelMetadata) -> ExportResult<RgbaImage>;
}

/// Transcoder for buffers of four 8-bit channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgba8Transcoder;

impl PixelTranscoder for Rgba8Transcoder {
    fn transcode(&self, pixels: &[u8], metadata: &PixelMetadata) -> ExportResult<RgbaImage> {
        let PixelMetadata {
            width,
            height,
            stride_width,
            stride_height,
            channel_order,
        } = *metadata;

        let pitch = stride_width as usize * 4;
        let required = pitch * stride_height as usize;
        if width > stride_width || height > stride_height || pixels.len() < required {
            return Err(ExportError::PixelBufferSize {
                len: pixels.len(),
                width: stride_width,
                height: stride_height,
            });
        }

        let [r, g, b, a] = channel_order.rgba_offsets();
        let opaque = channel_order.forces_opaque();
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for row in pixels.chunks_exact(pitch).take(height as usize) {
            for texel in row.chunks_exact(4).take(width as usize) {
                let alpha = if opaque { u8::MAX } else { texel[a] };
                rgba.extend_from_slice(&[texel[r], texel[g], texel[b], alpha]);
            }
        }

        RgbaImage::from_raw(width, height, rgba).ok_or(ExportError::PixelBufferSize {
            len: pixels.len(),
            width,
            height,
        })
    }
}
