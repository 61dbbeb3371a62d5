//! Reorders Morton (Z-order) swizzled texels into row-major order.
//!
//! Swizzled and cube textures have power-of-two extents. Within each `min(w, h)`
//! square, x occupies the even bits and y the odd bits of the texel index; squares are
//! laid out one after another along the longer axis.

/// Spreads the low 16 bits of `value` into the even bits of the result.
#[inline]
fn part_1_by_1(value: u32) -> u64 {
    let mut x = value as u64 & 0xFFFF;
    x = (x | (x << 8)) & 0x00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333;
    x = (x | (x << 1)) & 0x5555_5555;
    x
}

/// Index of texel (`x`, `y`) in the swizzled order of a `width` x `height` texture.
///
/// Both dimensions must be powers of two.
pub fn morton_index(x: u32, y: u32, width: u32, height: u32) -> usize {
    let min = width.min(height);
    let k = min.trailing_zeros();
    let mask = min - 1;
    let (major, minor_x, minor_y) = if width > height {
        (x >> k, x & mask, y)
    } else {
        (y >> k, x, y & mask)
    };
    (((major as u64) << (2 * k)) | part_1_by_1(minor_x) | (part_1_by_1(minor_y) << 1)) as usize
}

/// Reorders a `width` x `height` buffer of `texel_size`-byte texels from swizzled to
/// row-major order. Texels missing from a short buffer are left zeroed.
pub fn deswizzle(swizzled: &[u8], width: u32, height: u32, texel_size: usize) -> Vec<u8> {
    let mut linear = vec![0u8; width as usize * height as usize * texel_size];
    for y in 0..height {
        for x in 0..width {
            let source = morton_index(x, y, width, height) * texel_size;
            let target = (y as usize * width as usize + x as usize) * texel_size;
            if let Some(texel) = swizzled.get(source..source + texel_size) {
                linear[target..target + texel_size].copy_from_slice(texel);
            }
        }
    }
    linear
}
