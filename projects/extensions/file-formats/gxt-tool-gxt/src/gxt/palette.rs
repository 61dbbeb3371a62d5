use super::constants::*;
use crate::error::{GxtError, GxtResult};
use alloc::boxed::Box;
use alloc::vec::Vec;
use gxt_tool_common::FormatDescriptor;

/// Palette pool a texture draws its colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// 16-entry palettes, used by 4-bit indexed textures.
    P4,
    /// 256-entry palettes, used by 8-bit indexed textures.
    P8,
}

impl PaletteKind {
    /// Number of 4-byte entries in one palette of this kind.
    #[inline]
    pub const fn entries(self) -> usize {
        self.byte_size() / 4
    }

    /// Size of one palette of this kind in bytes.
    #[inline]
    pub const fn byte_size(self) -> usize {
        match self {
            Self::P4 => P4_PALETTE_SIZE,
            Self::P8 => P8_PALETTE_SIZE,
        }
    }

    /// Pool used by an indexed format with the given bits per pixel.
    #[inline]
    pub const fn for_bits_per_pixel(bits_per_pixel: u32) -> Self {
        if bits_per_pixel == 4 {
            Self::P4
        } else {
            Self::P8
        }
    }
}

/// A texture's palette, as an index into one of the [`PaletteArena`] pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteRef {
    /// Pool the palette lives in.
    pub kind: PaletteKind,
    /// Index within the pool.
    pub index: usize,
}

/// A 16-entry palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette16(pub [u8; P4_PALETTE_SIZE]);

/// A 256-entry palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette256(pub [u8; P8_PALETTE_SIZE]);

/// All palettes of a container, loaded once before any texture is bound to them.
///
/// Both pools are sized up front and never grow, so a [`PaletteRef`] stays valid
/// for the lifetime of the arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteArena {
    small: Box<[Palette16]>,
    large: Box<[Palette256]>,
}

impl PaletteArena {
    /// Copies the palettes out of their regions. Trailing bytes short of a full
    /// palette are ignored.
    pub fn from_regions(p4_region: &[u8], p8_region: &[u8]) -> Self {
        let small = p4_region
            .chunks_exact(P4_PALETTE_SIZE)
            .filter_map(|chunk| chunk.try_into().ok().map(Palette16))
            .collect::<Vec<_>>();
        let large = p8_region
            .chunks_exact(P8_PALETTE_SIZE)
            .filter_map(|chunk| chunk.try_into().ok().map(Palette256))
            .collect::<Vec<_>>();

        Self {
            small: small.into_boxed_slice(),
            large: large.into_boxed_slice(),
        }
    }

    /// Number of palettes in the given pool.
    #[inline]
    pub fn len(&self, kind: PaletteKind) -> usize {
        match kind {
            PaletteKind::P4 => self.small.len(),
            PaletteKind::P8 => self.large.len(),
        }
    }

    /// Whether both pools are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.small.is_empty() && self.large.is_empty()
    }

    /// The raw 4-byte entries of a palette, or `None` if the reference is out of range.
    pub fn resolve(&self, palette: PaletteRef) -> Option<&[u8]> {
        match palette.kind {
            PaletteKind::P4 => self.small.get(palette.index).map(|p| &p.0[..]),
            PaletteKind::P8 => self.large.get(palette.index).map(|p| &p.0[..]),
        }
    }

    /// References to every palette in the given pool.
    pub fn refs(&self, kind: PaletteKind) -> impl Iterator<Item = PaletteRef> {
        (0..self.len(kind)).map(move |index| PaletteRef { kind, index })
    }
}

/// Binds a texture to its palette.
///
/// Indexed formats need a palette index in range for the pool matching their
/// bits per pixel. Other formats must carry [`PALETTE_INDEX_NONE`].
pub fn bind_palette(
    texture: usize,
    descriptor: &FormatDescriptor,
    palette_index: u32,
    palettes: &PaletteArena,
) -> GxtResult<Option<PaletteRef>> {
    if !descriptor.is_indexed {
        return match palette_index {
            PALETTE_INDEX_NONE => Ok(None),
            index => Err(GxtError::UnexpectedPalette { texture, index }),
        };
    }

    if palette_index == PALETTE_INDEX_NONE {
        return Err(GxtError::MissingPalette { texture });
    }

    let kind = PaletteKind::for_bits_per_pixel(descriptor.bits_per_pixel);
    let count = palettes.len(kind);
    if palette_index as usize >= count {
        return Err(GxtError::PaletteIndexOutOfRange {
            texture,
            index: palette_index,
            count,
        });
    }

    Ok(Some(PaletteRef {
        kind,
        index: palette_index as usize,
    }))
}
