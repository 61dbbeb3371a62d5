use super::constants::*;

/// Determines if the given data likely represents a GXT container.
/// This checks the `GXT\0` tag at offset 0 and that a full header is present.
/// For full validation, use [`parse_gxt`].
///
/// [`parse_gxt`]: crate::gxt::parse_gxt::parse_gxt
#[inline(always)]
pub fn likely_gxt(data: &[u8]) -> bool {
    data.len() >= GXT_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == GXT_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::iter::repeat_n;

    #[test]
    fn likely_gxt_matches_tag_and_header_length() {
        let data = *b"GXT\0";
        let valid = data
            .into_iter()
            .chain(repeat_n(0, GXT_HEADER_SIZE - 4))
            .collect::<Vec<u8>>();
        assert!(likely_gxt(&valid));
    }

    #[test]
    fn likely_gxt_ignores_version() {
        let mut data = GxtBuilder::new().build();
        patch_u32(&mut data, HEADER_VERSION_OFFSET, 0xDEAD_BEEF);
        assert!(likely_gxt(&data));
    }

    #[rstest]
    #[case(b"GXT\0".to_vec())]
    #[case(b"GXT\0".iter().copied().chain(repeat_n(0, 27)).collect())]
    #[case(repeat_n(0, 64).collect())]
    #[case(b"\x89PNG".iter().copied().chain(repeat_n(0, 124)).collect())]
    #[case(Vec::new())]
    fn likely_gxt_rejects(#[case] data: Vec<u8>) {
        assert!(!likely_gxt(&data));
    }
}
