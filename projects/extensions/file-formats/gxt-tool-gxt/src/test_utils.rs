//! Builds synthetic GXT containers.
//!
//! Layout written: header, texture info table, texture data (border bytes first, each
//! texture's data padded to 16 bytes), 16-entry palettes, 256-entry palettes.

use crate::gxt::constants::*;
use alloc::vec;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};
use gxt_tool_common::{TextureFormat, TextureType};

/// Writes `value` little-endian at `offset`.
///
/// # Panics
///
/// If `offset + 4` is past the end of `data`.
pub fn patch_u32(data: &mut [u8], offset: usize, value: u32) {
    assert!(offset + 4 <= data.len(), "patch at {offset} out of bounds");
    // SAFETY: Bounds checked above.
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(value, offset as isize);
    }
}

/// One texture to place in a built container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTexture {
    /// Format code.
    pub format: TextureFormat,
    /// Raw type code.
    pub type_code: u32,
    /// Width.
    pub width: u16,
    /// Height.
    pub height: u16,
    /// Mip count.
    pub mip_count: u8,
    /// Palette index.
    pub palette_index: u32,
    /// Flags.
    pub flags: u32,
    /// Border bytes written ahead of the payload.
    pub border: Vec<u8>,
    /// Payload bytes.
    pub payload: Vec<u8>,
}

impl TestTexture {
    /// A single-level texture with no palette and no border.
    pub fn new(
        format: TextureFormat,
        texture_type: TextureType,
        width: u16,
        height: u16,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            format,
            type_code: texture_type as u32,
            width,
            height,
            mip_count: 1,
            palette_index: PALETTE_INDEX_NONE,
            flags: 0,
            border: Vec::new(),
            payload,
        }
    }

    /// Sets the palette index.
    pub fn with_palette(mut self, index: u32) -> Self {
        self.palette_index = index;
        self
    }

    /// Sets the mip count.
    pub fn with_mip_count(mut self, mip_count: u8) -> Self {
        self.mip_count = mip_count;
        self
    }

    /// Sets the border flag and the bytes stored ahead of the payload.
    pub fn with_border(mut self, border: Vec<u8>) -> Self {
        self.flags |= TEXTURE_FLAG_BORDER;
        self.border = border;
        self
    }

    /// Overrides the raw type code.
    pub fn with_type_code(mut self, type_code: u32) -> Self {
        self.type_code = type_code;
        self
    }

    fn stored_len(&self) -> usize {
        (self.border.len() + self.payload.len()).next_multiple_of(16)
    }
}

/// Assembles a GXT container from textures and palettes.
#[derive(Debug, Clone, Default)]
pub struct GxtBuilder {
    textures: Vec<TestTexture>,
    p4_palettes: Vec<Vec<u8>>,
    p8_palettes: Vec<Vec<u8>>,
}

impl GxtBuilder {
    /// An empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a texture.
    pub fn texture(mut self, texture: TestTexture) -> Self {
        self.textures.push(texture);
        self
    }

    /// Appends a 16-entry palette, resized to 64 bytes.
    pub fn p4_palette(mut self, mut palette: Vec<u8>) -> Self {
        palette.resize(P4_PALETTE_SIZE, 0);
        self.p4_palettes.push(palette);
        self
    }

    /// Appends a 256-entry palette, resized to 1024 bytes.
    pub fn p8_palette(mut self, mut palette: Vec<u8>) -> Self {
        palette.resize(P8_PALETTE_SIZE, 0);
        self.p8_palettes.push(palette);
        self
    }

    /// Writes the container.
    pub fn build(&self) -> Vec<u8> {
        let data_offset = GXT_HEADER_SIZE + self.textures.len() * TEXTURE_INFO_SIZE;
        let texture_bytes: usize = self.textures.iter().map(TestTexture::stored_len).sum();
        let data_size = texture_bytes
            + self.p4_palettes.len() * P4_PALETTE_SIZE
            + self.p8_palettes.len() * P8_PALETTE_SIZE;

        let mut data = vec![0u8; data_offset + data_size];
        patch_u32(&mut data, HEADER_TAG_OFFSET, GXT_MAGIC);
        patch_u32(&mut data, HEADER_VERSION_OFFSET, GXT_VERSION);
        patch_u32(&mut data, HEADER_NUM_TEXTURES_OFFSET, self.textures.len() as u32);
        patch_u32(&mut data, HEADER_DATA_OFFSET_OFFSET, data_offset as u32);
        patch_u32(&mut data, HEADER_DATA_SIZE_OFFSET, data_size as u32);
        patch_u32(&mut data, HEADER_NUM_P4_PALETTES_OFFSET, self.p4_palettes.len() as u32);
        patch_u32(&mut data, HEADER_NUM_P8_PALETTES_OFFSET, self.p8_palettes.len() as u32);

        let mut cursor = data_offset;
        for (index, texture) in self.textures.iter().enumerate() {
            let record = GXT_HEADER_SIZE + index * TEXTURE_INFO_SIZE;
            let dimensions = (texture.width as u32) | ((texture.height as u32) << 16);
            patch_u32(&mut data, record + INFO_DATA_OFFSET_OFFSET, cursor as u32);
            patch_u32(&mut data, record + INFO_DATA_SIZE_OFFSET, texture.payload.len() as u32);
            patch_u32(&mut data, record + INFO_PALETTE_INDEX_OFFSET, texture.palette_index);
            patch_u32(&mut data, record + INFO_FLAGS_OFFSET, texture.flags);
            patch_u32(&mut data, record + INFO_TYPE_OFFSET, texture.type_code);
            patch_u32(&mut data, record + INFO_FORMAT_OFFSET, texture.format.code());
            patch_u32(&mut data, record + INFO_DIMENSIONS_OFFSET, dimensions);
            patch_u32(&mut data, record + INFO_MIP_COUNT_OFFSET, texture.mip_count as u32);

            let border_end = cursor + texture.border.len();
            data[cursor..border_end].copy_from_slice(&texture.border);
            data[border_end..border_end + texture.payload.len()].copy_from_slice(&texture.payload);
            cursor += texture.stored_len();
        }

        for palette in self.p4_palettes.iter().chain(&self.p8_palettes) {
            data[cursor..cursor + palette.len()].copy_from_slice(palette);
            cursor += palette.len();
        }

        data
    }
}
