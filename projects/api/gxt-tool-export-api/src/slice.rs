use crate::error::{ExportError, ExportResult};
use gxt_tool_common::LayoutSlice;
use gxt_tool_gxt::GxtTexture;

/// Every face/level slice of a texture, face-major.
pub fn texture_slices(index: usize, texture: &GxtTexture) -> ExportResult<Vec<LayoutSlice>> {
    texture
        .layout()
        .slices()
        .map_err(|source| ExportError::Layout {
            texture: index,
            source,
        })
}

/// The payload bytes of one slice.
///
/// # Errors
///
/// [`ExportError::SliceOutOfBounds`] if the slice reaches past the end of the payload.
pub fn slice_bytes<'a>(
    index: usize,
    texture: &'a GxtTexture,
    slice: &LayoutSlice,
) -> ExportResult<&'a [u8]> {
    let end = slice.offset + slice.size;
    if end > texture.data.len() as u64 {
        return Err(ExportError::SliceOutOfBounds {
            texture: index,
            face: slice.face,
            level: slice.level,
            end,
            len: texture.data.len(),
        });
    }
    Ok(&texture.data[slice.byte_range()])
}
