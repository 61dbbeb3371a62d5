//! Error types for format classification and layout calculation.

use thiserror::Error;

/// Errors raised when a texture format code cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The masked base format is not one this tool knows how to size (e.g. planar YUV).
    #[error("unsupported base format {base:#010X} (format {code:#010X})")]
    UnsupportedFormat {
        /// The full format code.
        code: u32,
        /// The masked base format bits.
        base: u32,
    },
}

/// Errors raised when a texture type code is not one of the known layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextureTypeError {
    /// Unrecognized texture type code.
    #[error("unknown texture type {0:#010X}")]
    Unknown(u32),
}

/// Errors raised while sizing border data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BorderError {
    /// Indexed and block-compressed formats cannot carry border data.
    #[error("format {0:#010X} does not support border data")]
    FormatNotSupported(u32),

    /// The largest dimension is above the end of the border size table.
    #[error("dimension {0} is too large for border data")]
    DimensionTooLarge(u32),

    /// Format could not be classified.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors raised while validating dimensions or computing a payload layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Width or height of zero.
    #[error("texture dimensions {width}x{height} contain a zero")]
    ZeroDimension {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// Width exceeds the hardware maximum.
    #[error("width {value} > {max}")]
    WidthTooLarge {
        /// Declared width.
        value: u32,
        /// Maximum supported width.
        max: u32,
    },

    /// Height exceeds the hardware maximum.
    #[error("height {value} > {max}")]
    HeightTooLarge {
        /// Declared height.
        value: u32,
        /// Maximum supported height.
        max: u32,
    },

    /// Swizzled and cube textures need power-of-two widths.
    #[error("width {0} is not pow2")]
    WidthNotPowerOfTwo(u32),

    /// Swizzled and cube textures need power-of-two heights.
    #[error("height {0} is not pow2")]
    HeightNotPowerOfTwo(u32),

    /// The computed payload does not fit in 32 bits.
    #[error("texture payload size overflows 32 bits")]
    SizeOverflow,

    /// Format could not be classified.
    #[error(transparent)]
    Format(#[from] FormatError),
}
