use crate::error::TextureTypeError;
use derive_enum_all_values::AllValues;

/// Memory layout of a texture (`SceGxmTextureType`).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TextureType {
    /// Swizzled layout; dimensions must be powers of two.
    Swizzled = 0x0000_0000,
    /// Implicitly swizzled cube map with six faces; dimensions must be powers of two.
    Cube = 0x4000_0000,
    /// Linear layout with an implicit, aligned row stride.
    Linear = 0x6000_0000,
    /// Tiled layout.
    Tiled = 0x8000_0000,
    /// Swizzled layout with arbitrary dimensions.
    SwizzledArbitrary = 0xA000_0000,
    /// Linear layout with an explicit stride.
    LinearStrided = 0xC000_0000,
    /// Cube map with arbitrary dimensions.
    CubeArbitrary = 0xE000_0000,
}

impl TextureType {
    /// Whether width and height must both be powers of two.
    #[inline]
    pub const fn requires_power_of_two(self) -> bool {
        matches!(self, Self::Swizzled | Self::Cube)
    }

    /// Number of faces stored for this type. Only [`TextureType::Cube`] stores six.
    #[inline]
    pub const fn face_count(self) -> u32 {
        match self {
            Self::Cube => 6,
            _ => 1,
        }
    }

    /// Whether the texels are stored in Morton (Z-order) layout with power-of-two extents.
    #[inline]
    pub const fn is_morton_swizzled(self) -> bool {
        matches!(self, Self::Swizzled | Self::Cube)
    }
}

impl TryFrom<u32> for TextureType {
    type Error = TextureTypeError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::all_values()
            .iter()
            .copied()
            .find(|texture_type| *texture_type as u32 == code)
            .ok_or(TextureTypeError::Unknown(code))
    }
}
