//! Texture payload layout.
//!
//! Reproduces the GPU's memory model for a texture's payload: each face stores its
//! whole mip chain contiguously, mip extents are padded to powers of two (and to the
//! compression block size), linear rows are padded to the implicit stride, mip-mapped
//! cube faces are padded to the face alignment, and the whole payload to
//! [`TEXTURE_ALIGNMENT`].
//!
//! [`TextureLayout::data_size`] and [`TextureLayout::slices`] share one walker, so
//! the slice boundaries used for export are the ones the payload size was built from.

use crate::error::LayoutError;
use crate::format::{classify, TextureFormat};
use crate::texture_type::TextureType;
use alloc::vec::Vec;
use core::ops::Range;

/// Largest supported width or height.
pub const MAX_TEXTURE_SIZE: u32 = 4096;

/// Alignment of a complete texture payload.
pub const TEXTURE_ALIGNMENT: u64 = 16;

/// Alignment between mip-mapped cube faces above the "no align" size.
pub const TEXTURE_FACE_ALIGNMENT: u32 = 2048;

/// Alignment between mip-mapped cube faces at or below the "no align" size.
pub const TEXTURE_MIN_FACE_ALIGNMENT: u32 = 4;

/// Largest cube face width not padded to [`TEXTURE_FACE_ALIGNMENT`] for formats of
/// 8 bits per pixel or less (this includes block-compressed formats).
pub const CUBE_NO_ALIGN_SIZE_8BPP: u32 = 16;

/// Largest cube face width not padded to [`TEXTURE_FACE_ALIGNMENT`] for 16 to 32 bpp.
pub const CUBE_NO_ALIGN_SIZE_16_32BPP: u32 = 8;

/// Largest cube face width not padded to [`TEXTURE_FACE_ALIGNMENT`] for 64 bpp.
pub const CUBE_NO_ALIGN_SIZE_64BPP: u32 = 4;

/// Row alignment, in texels, of [`TextureType::Linear`] textures.
pub const IMPLICIT_STRIDE_ALIGNMENT: u32 = 8;

/// Rounds `value` up to a multiple of `alignment` (a power of two).
#[inline(always)]
pub const fn align_up(value: u64, alignment: u64) -> u64 {
    (value + (alignment - 1)) & !(alignment - 1)
}

/// Smallest power of two greater than or equal to `value`.
#[inline(always)]
pub const fn enclosing_power_of_two(value: u32) -> u32 {
    value.next_power_of_two()
}

/// Alignment between the mip chains of consecutive cube faces.
///
/// `width` is the declared top-level width of the face.
pub const fn face_alignment(bits_per_pixel: u32, width: u32) -> u32 {
    let exceeds_no_align_size = (bits_per_pixel <= 8 && width > CUBE_NO_ALIGN_SIZE_8BPP)
        || (bits_per_pixel >= 16 && bits_per_pixel <= 32 && width > CUBE_NO_ALIGN_SIZE_16_32BPP)
        || (bits_per_pixel >= 64 && width > CUBE_NO_ALIGN_SIZE_64BPP);

    if exceeds_no_align_size {
        TEXTURE_FACE_ALIGNMENT
    } else {
        TEXTURE_MIN_FACE_ALIGNMENT
    }
}

/// Checks the declared dimensions against the hardware limits for `texture_type`.
pub fn validate_dimensions(
    width: u32,
    height: u32,
    texture_type: TextureType,
) -> Result<(), LayoutError> {
    if width == 0 || height == 0 {
        return Err(LayoutError::ZeroDimension { width, height });
    }
    if width > MAX_TEXTURE_SIZE {
        return Err(LayoutError::WidthTooLarge {
            value: width,
            max: MAX_TEXTURE_SIZE,
        });
    }
    if height > MAX_TEXTURE_SIZE {
        return Err(LayoutError::HeightTooLarge {
            value: height,
            max: MAX_TEXTURE_SIZE,
        });
    }
    if texture_type.requires_power_of_two() {
        if !width.is_power_of_two() {
            return Err(LayoutError::WidthNotPowerOfTwo(width));
        }
        if !height.is_power_of_two() {
            return Err(LayoutError::HeightNotPowerOfTwo(height));
        }
    }
    Ok(())
}

/// Shape of a texture payload: everything needed to size it and locate its slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureLayout {
    /// Top-level width in texels.
    pub width: u32,
    /// Top-level height in texels.
    pub height: u32,
    /// Number of mip levels stored per face.
    pub levels: u32,
    /// Number of faces (6 for cube maps, otherwise 1).
    pub faces: u32,
    /// Packed format code.
    pub format: TextureFormat,
    /// Memory layout type.
    pub texture_type: TextureType,
}

/// The location of one face/mip level inside a texture payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSlice {
    /// Face index.
    pub face: u32,
    /// Mip level index, 0 being the largest.
    pub level: u32,
    /// Byte offset from the start of the payload.
    pub offset: u64,
    /// Byte length of the slice.
    pub size: u64,
    /// Visible width of this level in texels.
    pub width: u32,
    /// Visible height of this level in texels.
    pub height: u32,
    /// Padded width (row pitch) of this level in texels.
    pub stride_width: u32,
    /// Padded height of this level in texels.
    pub stride_height: u32,
}

impl LayoutSlice {
    /// Byte range of this slice relative to the start of the payload.
    #[inline]
    pub fn byte_range(&self) -> Range<usize> {
        self.offset as usize..(self.offset + self.size) as usize
    }
}

/// Extents of the current level while walking down a mip chain.
struct MipChain {
    width: u32,
    height: u32,
    stride_width: u32,
    stride_height: u32,
    min_width: u32,
    min_height: u32,
    width_alignment: u32,
    block_compressed: bool,
}

impl MipChain {
    fn block_compressed(width: u32, height: u32, block_width: u32, block_height: u32) -> Self {
        let width = width.max(block_width);
        let height = height.max(block_height);
        Self {
            width,
            height,
            stride_width: enclosing_power_of_two(width),
            stride_height: enclosing_power_of_two(height),
            min_width: block_width,
            min_height: block_height,
            width_alignment: 1,
            block_compressed: true,
        }
    }

    fn uncompressed(width: u32, height: u32, levels: u32, width_alignment: u32) -> Self {
        let (stride_width, stride_height) = if levels > 1 {
            (enclosing_power_of_two(width), enclosing_power_of_two(height))
        } else {
            (width, height)
        };
        Self {
            width,
            height,
            stride_width: align_up(stride_width as u64, width_alignment as u64) as u32,
            stride_height,
            min_width: 1,
            min_height: 1,
            width_alignment,
            block_compressed: false,
        }
    }

    fn level_size(&self, bits_per_pixel: u32) -> u64 {
        let stride_width = self.stride_width as u64;
        let stride_height = self.stride_height as u64;
        let bits_per_pixel = bits_per_pixel as u64;
        if self.block_compressed {
            bits_per_pixel * stride_width * stride_height / 8
        } else {
            stride_height * (stride_width * bits_per_pixel).div_ceil(8)
        }
    }

    fn next_level(&mut self) {
        let halve = |value: u32, min: u32| if value > min { value / 2 } else { min };
        self.width = halve(self.width, self.min_width);
        self.height = halve(self.height, self.min_height);
        self.stride_width = halve(self.stride_width, self.min_width);
        self.stride_height = halve(self.stride_height, self.min_height);
        if !self.block_compressed {
            self.stride_width =
                align_up(self.stride_width as u64, self.width_alignment as u64) as u32;
        }
    }
}

impl TextureLayout {
    /// Validates the dimensions and returns the total payload size in bytes.
    pub fn data_size(&self) -> Result<u32, LayoutError> {
        self.walk(|_| {})
    }

    /// Validates the dimensions and returns every face/level slice, face-major.
    pub fn slices(&self) -> Result<Vec<LayoutSlice>, LayoutError> {
        let mut slices = Vec::with_capacity((self.faces * self.levels) as usize);
        self.walk(|slice| slices.push(slice))?;
        Ok(slices)
    }

    /// Walks every face and level, reporting each slice to `visit`, and returns the
    /// aligned payload size.
    fn walk(&self, mut visit: impl FnMut(LayoutSlice)) -> Result<u32, LayoutError> {
        validate_dimensions(self.width, self.height, self.texture_type)?;
        let descriptor = classify(self.format)?;
        let bits_per_pixel = descriptor.bits_per_pixel;

        let face_alignment = if self.faces > 1 && self.levels > 1 {
            face_alignment(bits_per_pixel, self.width)
        } else {
            1
        };
        let width_alignment = if self.texture_type == TextureType::Linear {
            IMPLICIT_STRIDE_ALIGNMENT
        } else {
            1
        };

        let mut total = 0u64;
        for face in 0..self.faces {
            let face_offset = total;
            let mut chain = if descriptor.is_block_compressed {
                MipChain::block_compressed(
                    self.width,
                    self.height,
                    descriptor.block_width,
                    descriptor.block_height,
                )
            } else {
                MipChain::uncompressed(self.width, self.height, self.levels, width_alignment)
            };

            for level in 0..self.levels {
                let size = chain.level_size(bits_per_pixel);
                visit(LayoutSlice {
                    face,
                    level,
                    offset: total,
                    size,
                    width: (self.width >> level.min(31)).max(1),
                    height: (self.height >> level.min(31)).max(1),
                    stride_width: chain.stride_width,
                    stride_height: chain.stride_height,
                });
                total += size;
                chain.next_level();
            }

            if face + 1 < self.faces {
                total = face_offset + align_up(total - face_offset, face_alignment as u64);
            }
        }

        let total = align_up(total, TEXTURE_ALIGNMENT);
        u32::try_from(total).map_err(|_| LayoutError::SizeOverflow)
    }
}

/// Computes the payload size of a texture.
///
/// # Errors
///
/// Fails when a dimension is zero or above [`MAX_TEXTURE_SIZE`], when a swizzled or
/// cube texture is not a power of two in both dimensions, or when the format is not
/// in the catalog.
pub fn texture_data_size(
    width: u32,
    height: u32,
    levels: u32,
    faces: u32,
    format: TextureFormat,
    texture_type: TextureType,
) -> Result<u32, LayoutError> {
    TextureLayout {
        width,
        height,
        levels,
        faces,
        format,
        texture_type,
    }
    .data_size()
}

/// Computes the location of every face/level slice of a texture.
///
/// Slices are ordered face-major: all levels of face 0, then face 1, and so on.
pub fn texture_slices(
    width: u32,
    height: u32,
    levels: u32,
    faces: u32,
    format: TextureFormat,
    texture_type: TextureType,
) -> Result<Vec<LayoutSlice>, LayoutError> {
    TextureLayout {
        width,
        height,
        levels,
        faces,
        format,
        texture_type,
    }
    .slices()
}
