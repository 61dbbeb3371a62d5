//! Error types for GXT container parsing.

use gxt_tool_common::{BorderError, FormatError, LayoutError};
use thiserror::Error;

/// Result type for GXT parsing.
pub type GxtResult<T> = Result<T, GxtError>;

/// Errors raised while parsing a GXT container.
///
/// Any of these aborts parsing of the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GxtError {
    /// The buffer cannot hold the structure being read.
    #[error("Input too short: required at least {required} bytes, got {actual} bytes")]
    InputTooShort {
        /// Bytes needed.
        required: usize,
        /// Bytes available.
        actual: usize,
    },

    /// The header tag is not `GXT\0`.
    #[error("Invalid GXT magic {0:#010X}")]
    InvalidMagic(u32),

    /// The header version is not the supported one.
    #[error("Unsupported GXT version {found:#010X} (expected {expected:#010X})")]
    UnsupportedVersion {
        /// Version stored in the file.
        found: u32,
        /// The only version this parser reads.
        expected: u32,
    },

    /// The declared palettes do not fit in the declared data region.
    #[error("Palette region of {required} bytes exceeds data size {data_size}")]
    PaletteRegionTooLarge {
        /// Bytes needed by all declared palettes.
        required: u64,
        /// Declared data region size.
        data_size: u32,
    },

    /// The declared data region extends beyond the end of the buffer.
    #[error("Data region {offset:#X}+{size:#X} exceeds file size {file_size:#X}")]
    DataRegionOutOfBounds {
        /// Declared data region offset.
        offset: u32,
        /// Declared data region size.
        size: u32,
        /// Buffer length.
        file_size: usize,
    },

    /// The texture info table overlaps the palette region.
    #[error("Texture info table ends at {end:#X}, past the palette region at {palette_start:#X}")]
    TextureTableOutOfBounds {
        /// End of the texture info table.
        end: u64,
        /// Start of the palette region.
        palette_start: u64,
    },

    /// A texture payload lies outside the texture data region.
    #[error("Texture {texture}: payload {start:#X}..{end:#X} lies outside the data region")]
    TextureDataOutOfBounds {
        /// Texture index.
        texture: usize,
        /// Start of the payload.
        start: u64,
        /// End of the payload (exclusive).
        end: u64,
    },

    /// A texture uses a type code outside the known set.
    #[error("Texture {texture}: unknown texture type {code:#010X}")]
    UnknownTextureType {
        /// Texture index.
        texture: usize,
        /// Raw type code.
        code: u32,
    },

    /// A texture uses a format outside the catalog.
    #[error("Texture {texture}: {source}")]
    UnsupportedFormat {
        /// Texture index.
        texture: usize,
        /// Classification failure.
        source: FormatError,
    },

    /// A texture's dimensions are invalid for its type, or its size overflows.
    #[error("Texture {texture}: {source}")]
    Layout {
        /// Texture index.
        texture: usize,
        /// Layout failure.
        source: LayoutError,
    },

    /// A texture has the border flag set but its border cannot be sized.
    #[error("Texture {texture}: {source}")]
    Border {
        /// Texture index.
        texture: usize,
        /// Border sizing failure.
        source: BorderError,
    },

    /// An indexed texture has no palette.
    #[error("Texture {texture}: indexed format without a palette")]
    MissingPalette {
        /// Texture index.
        texture: usize,
    },

    /// An indexed texture references a palette past the end of its pool.
    #[error("Texture {texture}: palette index {index} out of range ({count} palettes)")]
    PaletteIndexOutOfRange {
        /// Texture index.
        texture: usize,
        /// Referenced palette.
        index: u32,
        /// Number of palettes in the matching pool.
        count: usize,
    },

    /// A non-indexed texture references a palette.
    #[error("Texture {texture}: palette index {index} set on a non-indexed format")]
    UnexpectedPalette {
        /// Texture index.
        texture: usize,
        /// Referenced palette.
        index: u32,
    },
}
