//! GXT format constants and definitions
#![allow(missing_docs)]

/// Header tag, `GXT\0` read as a little-endian u32.
pub const GXT_MAGIC: u32 = 0x0054_5847;

/// The only supported container version.
pub const GXT_VERSION: u32 = 0x1000_0003;

/// Size of the container header.
pub const GXT_HEADER_SIZE: usize = 0x20;

/// Size of one texture info record. The table starts right after the header.
pub const TEXTURE_INFO_SIZE: usize = 0x20;

/// Palette index meaning "no palette".
pub const PALETTE_INDEX_NONE: u32 = u32::MAX;

/// Texture flag: border data precedes the payload.
pub const TEXTURE_FLAG_BORDER: u32 = 1;

/// Size of a 16-entry palette (P4 textures).
pub const P4_PALETTE_SIZE: usize = 16 * 4;

/// Size of a 256-entry palette (P8 textures).
pub const P8_PALETTE_SIZE: usize = 256 * 4;

// Header field offsets
pub const HEADER_TAG_OFFSET: usize = 0x00;
pub const HEADER_VERSION_OFFSET: usize = 0x04;
pub const HEADER_NUM_TEXTURES_OFFSET: usize = 0x08;
pub const HEADER_DATA_OFFSET_OFFSET: usize = 0x0C;
pub const HEADER_DATA_SIZE_OFFSET: usize = 0x10;
pub const HEADER_NUM_P4_PALETTES_OFFSET: usize = 0x14;
pub const HEADER_NUM_P8_PALETTES_OFFSET: usize = 0x18;

// Texture info field offsets (relative to the record)
pub const INFO_DATA_OFFSET_OFFSET: usize = 0x00;
pub const INFO_DATA_SIZE_OFFSET: usize = 0x04;
pub const INFO_PALETTE_INDEX_OFFSET: usize = 0x08;
pub const INFO_FLAGS_OFFSET: usize = 0x0C;
pub const INFO_TYPE_OFFSET: usize = 0x10;
pub const INFO_FORMAT_OFFSET: usize = 0x14;
/// Width in the low 16 bits, height in the high 16 bits.
pub const INFO_DIMENSIONS_OFFSET: usize = 0x18;
/// Mip count in the low 8 bits, the rest is padding.
pub const INFO_MIP_COUNT_OFFSET: usize = 0x1C;
