//! GXM texture format catalog.
//!
//! A `SceGxmTextureFormat` code packs a base format into bits 31 and 24-28 and a
//! channel swizzle into bits 12-14. Everything downstream (layout, border sizing,
//! palette binding, export) queries [`classify`] rather than matching on raw codes.

use crate::error::FormatError;
use bitfield::bitfield;
use derive_enum_all_values::AllValues;

/// Mask selecting the base format bits of a format code.
pub const BASE_FORMAT_MASK: u32 = 0x9F00_0000;

bitfield! {
    /// A packed GXM texture format code, as stored in a GXT texture info record.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextureFormat(u32);
    impl Debug;
    u32;

    /// Channel swizzle selector (3 bits).
    pub swizzle, _: 14, 12;
    /// Low five bits of the base format (3 bits of family + 2 bits of variant).
    base_low, _: 28, 24;
    /// Set for block-compressed, packed and palettized base formats.
    base_high, _: 31, 31;
}

impl TextureFormat {
    /// 4x 8-bit unsigned, read in ABGR order (memory bytes R, G, B, A).
    pub const U8U8U8U8_ABGR: Self = Self(0x0C00_0000);
    /// 4x 8-bit unsigned, read in ARGB order (memory bytes B, G, R, A).
    pub const U8U8U8U8_ARGB: Self = Self(0x0C00_1000);
    /// 4x 8-bit unsigned, read in RGBA order (memory bytes A, B, G, R).
    pub const U8U8U8U8_RGBA: Self = Self(0x0C00_2000);
    /// 4x 8-bit unsigned, read in BGRA order (memory bytes A, R, G, B).
    pub const U8U8U8U8_BGRA: Self = Self(0x0C00_3000);
    /// 4-bit palette index, ABGR palette entries.
    pub const P4_ABGR: Self = Self(0x9400_0000);
    /// 4-bit palette index, RGBA palette entries.
    pub const P4_RGBA: Self = Self(0x9400_2000);
    /// 8-bit palette index, ABGR palette entries.
    pub const P8_ABGR: Self = Self(0x9500_0000);
    /// 8-bit palette index, ARGB palette entries.
    pub const P8_ARGB: Self = Self(0x9500_1000);
    /// 8-bit palette index, RGBA palette entries.
    pub const P8_RGBA: Self = Self(0x9500_2000);
    /// UBC1 (DXT1) with ABGR swizzle.
    pub const UBC1_ABGR: Self = Self(0x8500_0000);
    /// PVRT 2bpp with ABGR swizzle.
    pub const PVRT2BPP_ABGR: Self = Self(0x8000_0000);

    /// Wraps a raw format code.
    #[inline]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw format code.
    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// The masked base format bits.
    #[inline]
    pub const fn base_bits(self) -> u32 {
        self.0 & BASE_FORMAT_MASK
    }

    /// Index of this format's base into the 64-slot catalog.
    #[inline]
    fn catalog_index(self) -> usize {
        (self.base_low() | (self.base_high() << 5)) as usize
    }

    /// Channel order used when the format is read as four 8-bit components.
    #[inline]
    pub fn channel_order(self) -> ChannelOrder {
        ChannelOrder::from_swizzle(self.swizzle())
    }
}

impl From<u32> for TextureFormat {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// GXM texture base formats (the code with all swizzle bits cleared).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[allow(missing_docs)]
pub enum BaseFormat {
    U8 = 0x0000_0000,
    S8 = 0x0100_0000,
    U4U4U4U4 = 0x0200_0000,
    U8U3U3U2 = 0x0300_0000,
    U1U5U5U5 = 0x0400_0000,
    U5U6U5 = 0x0500_0000,
    S5S5U6 = 0x0600_0000,
    U8U8 = 0x0700_0000,
    S8S8 = 0x0800_0000,
    U16 = 0x0900_0000,
    S16 = 0x0A00_0000,
    F16 = 0x0B00_0000,
    U8U8U8U8 = 0x0C00_0000,
    S8S8S8S8 = 0x0D00_0000,
    U2U10U10U10 = 0x0E00_0000,
    U16U16 = 0x0F00_0000,
    S16S16 = 0x1000_0000,
    F16F16 = 0x1100_0000,
    F32 = 0x1200_0000,
    F32M = 0x1300_0000,
    X8S8S8U8 = 0x1400_0000,
    X8U24 = 0x1500_0000,
    U32 = 0x1700_0000,
    S32 = 0x1800_0000,
    SE5M9M9M9 = 0x1900_0000,
    F11F11F10 = 0x1A00_0000,
    F16F16F16F16 = 0x1B00_0000,
    U16U16U16U16 = 0x1C00_0000,
    S16S16S16S16 = 0x1D00_0000,
    F32F32 = 0x1E00_0000,
    U32U32 = 0x1F00_0000,
    Pvrt2Bpp = 0x8000_0000,
    Pvrt4Bpp = 0x8100_0000,
    PvrtII2Bpp = 0x8200_0000,
    PvrtII4Bpp = 0x8300_0000,
    Ubc1 = 0x8500_0000,
    Ubc2 = 0x8600_0000,
    Ubc3 = 0x8700_0000,
    Ubc4 = 0x8800_0000,
    Sbc4 = 0x8900_0000,
    Ubc5 = 0x8A00_0000,
    Sbc5 = 0x8B00_0000,
    Yuv420P2 = 0x9000_0000,
    Yuv420P3 = 0x9100_0000,
    Yuv422 = 0x9200_0000,
    P4 = 0x9400_0000,
    P8 = 0x9500_0000,
    U8U8U8 = 0x9800_0000,
    S8S8S8 = 0x9900_0000,
    U2F10F10F10 = 0x9A00_0000,
}

impl BaseFormat {
    /// The base format bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Everything the layout and export code needs to know about a base format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// The base format this descriptor was derived from.
    pub base: BaseFormat,
    /// Bits per texel (averaged over a block for compressed formats).
    pub bits_per_pixel: u32,
    /// Block width in texels, 0 when not block-compressed.
    pub block_width: u32,
    /// Block height in texels, 0 when not block-compressed.
    pub block_height: u32,
    /// Texels are indices into a palette.
    pub is_indexed: bool,
    /// Payload is stored as compressed blocks.
    pub is_block_compressed: bool,
    /// Textures of this format may carry border data.
    pub supports_border: bool,
}

impl FormatDescriptor {
    const fn plain(base: BaseFormat, bits_per_pixel: u32) -> Self {
        Self {
            base,
            bits_per_pixel,
            block_width: 0,
            block_height: 0,
            is_indexed: false,
            is_block_compressed: false,
            supports_border: true,
        }
    }

    const fn compressed(
        base: BaseFormat,
        bits_per_pixel: u32,
        block_width: u32,
        block_height: u32,
    ) -> Self {
        Self {
            base,
            bits_per_pixel,
            block_width,
            block_height,
            is_indexed: false,
            is_block_compressed: true,
            supports_border: false,
        }
    }

    const fn indexed(base: BaseFormat, bits_per_pixel: u32) -> Self {
        Self {
            base,
            bits_per_pixel,
            block_width: 0,
            block_height: 0,
            is_indexed: true,
            is_block_compressed: false,
            supports_border: false,
        }
    }
}

const fn describe(base: BaseFormat) -> Option<FormatDescriptor> {
    use BaseFormat::*;
    Some(match base {
        U8 | S8 => FormatDescriptor::plain(base, 8),
        U4U4U4U4 | U8U3U3U2 | U1U5U5U5 | U5U6U5 | S5S5U6 | U8U8 | S8S8 | U16 | S16 | F16 => {
            FormatDescriptor::plain(base, 16)
        }
        U8U8U8U8 | S8S8S8S8 | U2U10U10U10 | U16U16 | S16S16 | F16F16 | F32 | F32M
        | X8S8S8U8 | X8U24 | U32 | S32 | SE5M9M9M9 | F11F11F10 | U2F10F10F10 => {
            FormatDescriptor::plain(base, 32)
        }
        F16F16F16F16 | U16U16U16U16 | S16S16S16S16 | F32F32 | U32U32 => {
            FormatDescriptor::plain(base, 64)
        }
        U8U8U8 | S8S8S8 => FormatDescriptor::plain(base, 24),
        Pvrt2Bpp | PvrtII2Bpp => FormatDescriptor::compressed(base, 2, 8, 4),
        Pvrt4Bpp | PvrtII4Bpp => FormatDescriptor::compressed(base, 4, 4, 4),
        Ubc1 | Ubc4 | Sbc4 => FormatDescriptor::compressed(base, 4, 4, 4),
        Ubc2 | Ubc3 | Ubc5 | Sbc5 => FormatDescriptor::compressed(base, 8, 4, 4),
        P4 => FormatDescriptor::indexed(base, 4),
        P8 => FormatDescriptor::indexed(base, 8),
        Yuv420P2 | Yuv420P3 | Yuv422 => return None,
    })
}

const CATALOG_SLOTS: usize = 64;

const fn build_catalog() -> [Option<FormatDescriptor>; CATALOG_SLOTS] {
    let mut table = [None; CATALOG_SLOTS];
    let all = BaseFormat::all_values();
    let mut x = 0;
    while x < all.len() {
        let bits = all[x].bits();
        let slot = (((bits >> 24) & 0x1F) | ((bits >> 31) << 5)) as usize;
        table[slot] = describe(all[x]);
        x += 1;
    }
    table
}

static FORMAT_CATALOG: [Option<FormatDescriptor>; CATALOG_SLOTS] = build_catalog();

/// Looks up the [`FormatDescriptor`] for a format code.
///
/// # Errors
///
/// [`FormatError::UnsupportedFormat`] for base formats outside the supported set
/// (planar/packed YUV and unassigned codes). This is an expected outcome, not a bug.
#[inline]
pub fn classify(format: TextureFormat) -> Result<FormatDescriptor, FormatError> {
    FORMAT_CATALOG[format.catalog_index()].ok_or(FormatError::UnsupportedFormat {
        code: format.code(),
        base: format.base_bits(),
    })
}

/// Byte order of a four-component 8-bit texel in memory.
///
/// GXM names swizzles most-significant component first, so `ABGR` stores
/// R at the lowest address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// Memory bytes R, G, B, A.
    Abgr,
    /// Memory bytes B, G, R, A.
    Argb,
    /// Memory bytes A, B, G, R.
    Rgba,
    /// Memory bytes A, R, G, B.
    Bgra,
    /// As [`ChannelOrder::Abgr`], alpha forced to 1.
    OneBgr,
    /// As [`ChannelOrder::Argb`], alpha forced to 1.
    OneRgb,
    /// As [`ChannelOrder::Rgba`], alpha forced to 1.
    RgbOne,
    /// As [`ChannelOrder::Bgra`], alpha forced to 1.
    BgrOne,
}

impl ChannelOrder {
    /// Decodes the 3-bit 4-component swizzle selector.
    pub const fn from_swizzle(swizzle: u32) -> Self {
        match swizzle & 0x7 {
            0 => Self::Abgr,
            1 => Self::Argb,
            2 => Self::Rgba,
            3 => Self::Bgra,
            4 => Self::OneBgr,
            5 => Self::OneRgb,
            6 => Self::RgbOne,
            _ => Self::BgrOne,
        }
    }

    /// Offsets of the R, G, B and A bytes within one 4-byte texel.
    pub const fn rgba_offsets(self) -> [usize; 4] {
        match self {
            Self::Abgr | Self::OneBgr => [0, 1, 2, 3],
            Self::Argb | Self::OneRgb => [2, 1, 0, 3],
            Self::Rgba | Self::RgbOne => [3, 2, 1, 0],
            Self::Bgra | Self::BgrOne => [1, 2, 3, 0],
        }
    }

    /// Whether the alpha channel is ignored and read as fully opaque.
    pub const fn forces_opaque(self) -> bool {
        matches!(
            self,
            Self::OneBgr | Self::OneRgb | Self::RgbOne | Self::BgrOne
        )
    }
}
