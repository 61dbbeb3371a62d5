//! Expands palette indices into 4-byte palette entries.
//!
//! Entries are copied as stored, so the expanded buffer keeps the palette's memory
//! channel order; [`crate::transcode`] normalizes it afterwards.

/// Bytes per expanded texel.
pub const EXPANDED_TEXEL_SIZE: usize = 4;

#[inline]
fn entry(palette: &[u8], index: usize) -> [u8; EXPANDED_TEXEL_SIZE] {
    let start = index * EXPANDED_TEXEL_SIZE;
    match palette.get(start..start + EXPANDED_TEXEL_SIZE) {
        Some(&[a, b, c, d]) => [a, b, c, d],
        _ => [0; EXPANDED_TEXEL_SIZE],
    }
}

/// Expands 8-bit indices, one output texel per input byte.
pub fn expand_p8(indices: &[u8], palette: &[u8]) -> Vec<u8> {
    indices
        .iter()
        .flat_map(|&index| entry(palette, index as usize))
        .collect()
}

/// Expands 4-bit indices, low nibble first, for a `width` x `height` texel grid
/// whose rows are padded to whole bytes.
pub fn expand_p4(indices: &[u8], palette: &[u8], width: u32, height: u32) -> Vec<u8> {
    let width = width as usize;
    let row_bytes = width.div_ceil(2);
    let mut expanded = Vec::with_capacity(width * height as usize * EXPANDED_TEXEL_SIZE);

    for row in indices.chunks(row_bytes).take(height as usize) {
        for x in 0..width {
            let byte = row.get(x / 2).copied().unwrap_or(0);
            let index = if x % 2 == 0 { byte & 0x0F } else { byte >> 4 };
            expanded.extend_from_slice(&entry(palette, index as usize));
        }
    }

    expanded
}

/// Expands indices of either width. `bits_per_pixel` other than 4 is read as 8.
pub fn expand_indexed(
    indices: &[u8],
    palette: &[u8],
    bits_per_pixel: u32,
    width: u32,
    height: u32,
) -> Vec<u8> {
    if bits_per_pixel == 4 {
        expand_p4(indices, palette, width, height)
    } else {
        expand_p8(indices, palette)
    }
}
