use crate::error::BorderError;
use crate::format::{classify, TextureFormat};
use crate::layout::MAX_TEXTURE_SIZE;

/// Border slot sizes in texels, indexed by `floor(log2(max(width, height)))`.
const BORDER_SLOT_SIZES: [u32; 13] = [
    56, 64, 80, 112, 176, 304, 560, 1072, 2096, 4144, 8240, 16432, 32816,
];

/// Computes the number of border bytes stored ahead of a border-enabled texture.
///
/// # Errors
///
/// - [`BorderError::FormatNotSupported`] for indexed or block-compressed formats.
/// - [`BorderError::DimensionTooLarge`] when `max(width, height)` is above the
///   4096 texel hardware limit, which is also where the slot table ends.
/// - [`BorderError::Format`] when the format is not in the catalog.
pub fn border_data_size(
    width: u32,
    height: u32,
    format: TextureFormat,
) -> Result<u32, BorderError> {
    let descriptor = classify(format)?;
    if !descriptor.supports_border {
        return Err(BorderError::FormatNotSupported(format.code()));
    }

    let max_dimension = width.max(height);
    if max_dimension > MAX_TEXTURE_SIZE {
        return Err(BorderError::DimensionTooLarge(max_dimension));
    }

    let slot = max_dimension.checked_ilog2().unwrap_or(0) as usize;
    let slot_size = BORDER_SLOT_SIZES
        .get(slot)
        .ok_or(BorderError::DimensionTooLarge(max_dimension))?;

    Ok(slot_size * descriptor.bits_per_pixel / 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(BaseFormat::U8, 1, 1, 56)]
    #[case(BaseFormat::U8U8U8U8, 1, 1, 56 * 4)]
    #[case(BaseFormat::F32F32, 1, 1, 56 * 8)]
    #[case(BaseFormat::U8U8U8, 1, 1, 56 * 3)]
    #[case(BaseFormat::U5U6U5, 2, 3, 64 * 2)]
    #[case(BaseFormat::U8U8U8U8, 256, 16, 2096 * 4)]
    #[case(BaseFormat::U8U8U8U8, 4096, 4096, 32816 * 4)]
    fn border_size_uses_largest_dimension(
        #[case] base: BaseFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(
            border_data_size(width, height, base_format(base)),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(BaseFormat::P4)]
    #[case(BaseFormat::P8)]
    #[case(BaseFormat::Ubc1)]
    #[case(BaseFormat::Pvrt2Bpp)]
    fn border_rejected_for_indexed_and_compressed(#[case] base: BaseFormat) {
        assert_eq!(
            border_data_size(16, 16, base_format(base)),
            Err(BorderError::FormatNotSupported(base.bits()))
        );
    }

    #[rstest]
    #[case(4097, 1)]
    #[case(1, 5000)]
    #[case(8192, 8192)]
    fn border_rejected_above_max_texture_size(#[case] width: u32, #[case] height: u32) {
        let format = base_format(BaseFormat::U8U8U8U8);
        assert_eq!(
            border_data_size(width, height, format),
            Err(BorderError::DimensionTooLarge(width.max(height)))
        );
    }

    #[test]
    fn border_rejected_for_unknown_format() {
        let format = base_format(BaseFormat::Yuv422);
        assert!(matches!(
            border_data_size(1, 1, format),
            Err(BorderError::Format(_))
        ));
    }
}
