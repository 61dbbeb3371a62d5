use super::{constants::*, palette::*};
use crate::error::{GxtError, GxtResult};
use alloc::vec::Vec;
use endian_writer::{EndianReader, LittleEndianReader};
use gxt_tool_common::{
    border_data_size, classify, FormatDescriptor, TextureFormat, TextureLayout, TextureType,
};

/// The fixed header at the start of a GXT container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GxtHeader {
    /// Container version.
    pub version: u32,
    /// Number of texture info records.
    pub num_textures: u32,
    /// Offset of the data region.
    pub data_offset: u32,
    /// Size of the data region (texture payloads followed by palettes).
    pub data_size: u32,
    /// Number of 16-entry palettes.
    pub num_p4_palettes: u32,
    /// Number of 256-entry palettes.
    pub num_p8_palettes: u32,
}

impl GxtHeader {
    /// Bytes taken by the palettes at the tail of the data region.
    #[inline]
    pub fn palette_region_size(&self) -> u64 {
        self.num_p4_palettes as u64 * P4_PALETTE_SIZE as u64
            + self.num_p8_palettes as u64 * P8_PALETTE_SIZE as u64
    }
}

/// One texture info record, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Offset of the texture data (border data first, if present).
    pub data_offset: u32,
    /// Declared payload size. Informational; the computed layout size is used instead.
    pub data_size: u32,
    /// Palette index, or [`PALETTE_INDEX_NONE`].
    pub palette_index: u32,
    /// Flag bits, see [`TEXTURE_FLAG_BORDER`].
    pub flags: u32,
    /// Raw texture type code.
    pub texture_type: u32,
    /// Raw format code.
    pub format: u32,
    /// Width in texels.
    pub width: u16,
    /// Height in texels.
    pub height: u16,
    /// Stored mip levels.
    pub mip_count: u8,
}

impl TextureInfo {
    /// Whether border data precedes the payload.
    #[inline]
    pub fn has_border(&self) -> bool {
        self.flags & TEXTURE_FLAG_BORDER != 0
    }
}

/// A parsed texture and its owned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GxtTexture {
    /// Packed format code.
    pub format: TextureFormat,
    /// Classified format.
    pub descriptor: FormatDescriptor,
    /// Memory layout type.
    pub texture_type: TextureType,
    /// Top-level width.
    pub width: u32,
    /// Top-level height.
    pub height: u32,
    /// Mip levels per face. Zero leaves the texture without payload.
    pub levels: u32,
    /// Faces (6 for cube maps, otherwise 1).
    pub faces: u32,
    /// Whether border data preceded the payload in the container.
    pub has_border: bool,
    /// Payload bytes, exactly `layout().data_size()` long.
    pub data: Vec<u8>,
    /// Bound palette, for indexed formats.
    pub palette: Option<PaletteRef>,
}

impl GxtTexture {
    /// The layout this texture's payload follows.
    #[inline]
    pub fn layout(&self) -> TextureLayout {
        TextureLayout {
            width: self.width,
            height: self.height,
            levels: self.levels,
            faces: self.faces,
            format: self.format,
            texture_type: self.texture_type,
        }
    }
}

/// A fully parsed GXT container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GxtFile {
    /// The container header.
    pub header: GxtHeader,
    /// Textures, in table order.
    pub textures: Vec<GxtTexture>,
    /// Palettes referenced by the indexed textures.
    pub palettes: PaletteArena,
}

/// Parses the container header.
///
/// The tag is checked first, then the version; no other field is read until both match.
pub fn parse_gxt_header(data: &[u8]) -> GxtResult<GxtHeader> {
    if data.len() < GXT_HEADER_SIZE {
        return Err(GxtError::InputTooShort {
            required: GXT_HEADER_SIZE,
            actual: data.len(),
        });
    }

    // SAFETY: data.len() >= GXT_HEADER_SIZE (32), every header field offset + 4 is within it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let magic = unsafe { reader.read_u32_at(HEADER_TAG_OFFSET as isize) };
    if magic != GXT_MAGIC {
        return Err(GxtError::InvalidMagic(magic));
    }

    let version = unsafe { reader.read_u32_at(HEADER_VERSION_OFFSET as isize) };
    if version != GXT_VERSION {
        return Err(GxtError::UnsupportedVersion {
            found: version,
            expected: GXT_VERSION,
        });
    }

    unsafe {
        Ok(GxtHeader {
            version,
            num_textures: reader.read_u32_at(HEADER_NUM_TEXTURES_OFFSET as isize),
            data_offset: reader.read_u32_at(HEADER_DATA_OFFSET_OFFSET as isize),
            data_size: reader.read_u32_at(HEADER_DATA_SIZE_OFFSET as isize),
            num_p4_palettes: reader.read_u32_at(HEADER_NUM_P4_PALETTES_OFFSET as isize),
            num_p8_palettes: reader.read_u32_at(HEADER_NUM_P8_PALETTES_OFFSET as isize),
        })
    }
}

/// Reads one texture info record.
pub fn read_texture_info(record: &[u8; TEXTURE_INFO_SIZE]) -> TextureInfo {
    // SAFETY: The record is exactly TEXTURE_INFO_SIZE (32) bytes, every field offset + 4 is within it.
    let mut reader = unsafe { LittleEndianReader::new(record.as_ptr()) };
    unsafe {
        let dimensions = reader.read_u32_at(INFO_DIMENSIONS_OFFSET as isize);
        let mip_count = reader.read_u32_at(INFO_MIP_COUNT_OFFSET as isize);
        TextureInfo {
            data_offset: reader.read_u32_at(INFO_DATA_OFFSET_OFFSET as isize),
            data_size: reader.read_u32_at(INFO_DATA_SIZE_OFFSET as isize),
            palette_index: reader.read_u32_at(INFO_PALETTE_INDEX_OFFSET as isize),
            flags: reader.read_u32_at(INFO_FLAGS_OFFSET as isize),
            texture_type: reader.read_u32_at(INFO_TYPE_OFFSET as isize),
            format: reader.read_u32_at(INFO_FORMAT_OFFSET as isize),
            width: dimensions as u16,
            height: (dimensions >> 16) as u16,
            mip_count: mip_count as u8,
        }
    }
}

/// Parses a GXT container, copying every texture payload and palette out of `data`.
///
/// # Errors
///
/// Any malformed structure aborts the whole parse; see [`GxtError`] for the cases.
pub fn parse_gxt(data: &[u8]) -> GxtResult<GxtFile> {
    let header = parse_gxt_header(data)?;

    let palette_region_size = header.palette_region_size();
    if palette_region_size > header.data_size as u64 {
        return Err(GxtError::PaletteRegionTooLarge {
            required: palette_region_size,
            data_size: header.data_size,
        });
    }

    let data_start = header.data_offset as u64;
    let data_end = data_start + header.data_size as u64;
    if data_end > data.len() as u64 {
        return Err(GxtError::DataRegionOutOfBounds {
            offset: header.data_offset,
            size: header.data_size,
            file_size: data.len(),
        });
    }

    // 256-entry palettes sit at the very end, 16-entry palettes right before them.
    let p8_start = data_end - header.num_p8_palettes as u64 * P8_PALETTE_SIZE as u64;
    let p4_start = p8_start - header.num_p4_palettes as u64 * P4_PALETTE_SIZE as u64;
    let palettes = PaletteArena::from_regions(
        &data[p4_start as usize..p8_start as usize],
        &data[p8_start as usize..data_end as usize],
    );

    // The info table sits right after the header, whatever dataOffset says.
    let table_end =
        GXT_HEADER_SIZE as u64 + header.num_textures as u64 * TEXTURE_INFO_SIZE as u64;
    if table_end > p4_start {
        return Err(GxtError::TextureTableOutOfBounds {
            end: table_end,
            palette_start: p4_start,
        });
    }

    let textures = data[GXT_HEADER_SIZE..table_end as usize]
        .chunks_exact(TEXTURE_INFO_SIZE)
        .enumerate()
        .map(|(texture, record)| {
            let record = record.try_into().map_err(|_| GxtError::InputTooShort {
                required: TEXTURE_INFO_SIZE,
                actual: record.len(),
            })?;
            parse_texture(
                data,
                texture,
                &read_texture_info(record),
                data_start..p4_start,
                &palettes,
            )
        })
        .collect::<GxtResult<Vec<_>>>()?;

    Ok(GxtFile {
        header,
        textures,
        palettes,
    })
}

/// Validates one texture record, copies its payload out and binds its palette.
fn parse_texture(
    data: &[u8],
    texture: usize,
    info: &TextureInfo,
    texture_region: core::ops::Range<u64>,
    palettes: &PaletteArena,
) -> GxtResult<GxtTexture> {
    let texture_type = TextureType::try_from(info.texture_type).map_err(|_| {
        GxtError::UnknownTextureType {
            texture,
            code: info.texture_type,
        }
    })?;
    let format = TextureFormat::new(info.format);
    let descriptor =
        classify(format).map_err(|source| GxtError::UnsupportedFormat { texture, source })?;

    let layout = TextureLayout {
        width: info.width as u32,
        height: info.height as u32,
        levels: info.mip_count as u32,
        faces: texture_type.face_count(),
        format,
        texture_type,
    };
    let size = layout
        .data_size()
        .map_err(|source| GxtError::Layout { texture, source })?;

    let border_size = if info.has_border() {
        border_data_size(layout.width, layout.height, format)
            .map_err(|source| GxtError::Border { texture, source })?
    } else {
        0
    };

    let start = info.data_offset as u64 + border_size as u64;
    let end = start + size as u64;
    if (info.data_offset as u64) < texture_region.start || end > texture_region.end {
        return Err(GxtError::TextureDataOutOfBounds {
            texture,
            start,
            end,
        });
    }

    let palette = bind_palette(texture, &descriptor, info.palette_index, palettes)?;

    Ok(GxtTexture {
        format,
        descriptor,
        texture_type,
        width: layout.width,
        height: layout.height,
        levels: layout.levels,
        faces: layout.faces,
        has_border: info.has_border(),
        data: data[start as usize..end as usize].to_vec(),
        palette,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use gxt_tool_common::{BorderError, LayoutError};

    fn p8_palette_with_first_entry(entry: [u8; 4]) -> Vec<u8> {
        let mut palette = vec![0u8; P8_PALETTE_SIZE];
        palette[..4].copy_from_slice(&entry);
        palette
    }

    fn single_p8_container() -> Vec<u8> {
        GxtBuilder::new()
            .p8_palette(p8_palette_with_first_entry([255, 0, 0, 255]))
            .texture(
                TestTexture::new(
                    TextureFormat::P8_ABGR,
                    TextureType::Swizzled,
                    4,
                    4,
                    (0..16).collect(),
                )
                .with_palette(0),
            )
            .build()
    }

    #[test]
    fn parses_minimal_indexed_container() {
        let gxt = parse_gxt(&single_p8_container()).unwrap();

        assert_eq!(gxt.header.num_textures, 1);
        assert_eq!(gxt.palettes.len(PaletteKind::P8), 1);
        assert_eq!(gxt.palettes.len(PaletteKind::P4), 0);

        let texture = &gxt.textures[0];
        assert_eq!((texture.width, texture.height), (4, 4));
        assert_eq!((texture.levels, texture.faces), (1, 1));
        assert_eq!(texture.data, (0..16).collect::<Vec<u8>>());
        let palette = texture.palette.unwrap();
        assert_eq!(
            palette,
            PaletteRef {
                kind: PaletteKind::P8,
                index: 0
            }
        );

        let entries = gxt.palettes.resolve(palette).unwrap();
        let first = texture.data[0] as usize * 4;
        assert_eq!(&entries[first..first + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn header_fields_are_read() {
        let data = GxtBuilder::new()
            .p4_palette(vec![0; P4_PALETTE_SIZE])
            .p4_palette(vec![0; P4_PALETTE_SIZE])
            .p8_palette(vec![0; P8_PALETTE_SIZE])
            .build();
        let header = parse_gxt_header(&data).unwrap();
        assert_eq!(header.version, GXT_VERSION);
        assert_eq!(header.num_textures, 0);
        assert_eq!(header.data_offset, GXT_HEADER_SIZE as u32);
        assert_eq!(header.num_p4_palettes, 2);
        assert_eq!(header.num_p8_palettes, 1);
        assert_eq!(header.palette_region_size(), 2 * 64 + 1024);
    }

    #[rstest]
    #[case(GXT_VERSION + 1)]
    #[case(GXT_VERSION ^ 0xFF)]
    #[case(0x0000_0003)]
    fn version_mismatch_fails_before_other_fields(#[case] version: u32) {
        let mut data = single_p8_container();
        patch_u32(&mut data, HEADER_VERSION_OFFSET, version);
        patch_u32(&mut data, HEADER_NUM_TEXTURES_OFFSET, u32::MAX);
        patch_u32(&mut data, HEADER_DATA_SIZE_OFFSET, u32::MAX);
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::UnsupportedVersion {
                found: version,
                expected: GXT_VERSION
            })
        );
    }

    #[test]
    fn bad_magic_fails_before_version() {
        let mut data = single_p8_container();
        patch_u32(&mut data, HEADER_TAG_OFFSET, 0x2053_4444);
        patch_u32(&mut data, HEADER_VERSION_OFFSET, 0);
        assert_eq!(parse_gxt(&data), Err(GxtError::InvalidMagic(0x2053_4444)));
    }

    #[rstest]
    #[case(0)]
    #[case(8)]
    #[case(31)]
    fn truncated_header_fails(#[case] len: usize) {
        let data = single_p8_container();
        assert_eq!(
            parse_gxt(&data[..len]),
            Err(GxtError::InputTooShort {
                required: GXT_HEADER_SIZE,
                actual: len
            })
        );
    }

    #[test]
    fn palette_footprint_larger_than_data_region_fails() {
        let mut data = single_p8_container();
        // Two 256-entry palettes cannot fit in 1023 bytes.
        patch_u32(&mut data, HEADER_DATA_SIZE_OFFSET, 1023);
        patch_u32(&mut data, HEADER_NUM_P8_PALETTES_OFFSET, 2);
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::PaletteRegionTooLarge {
                required: 2048,
                data_size: 1023
            })
        );
    }

    #[test]
    fn data_region_past_end_of_file_fails() {
        let data = single_p8_container();
        let truncated = &data[..data.len() - 1];
        assert!(matches!(
            parse_gxt(truncated),
            Err(GxtError::DataRegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn texture_table_overlapping_palettes_fails() {
        let mut data = single_p8_container();
        patch_u32(&mut data, HEADER_NUM_TEXTURES_OFFSET, 100);
        assert!(matches!(
            parse_gxt(&data),
            Err(GxtError::TextureTableOutOfBounds { .. })
        ));
    }

    #[test]
    fn texture_payload_reaching_into_palettes_fails() {
        let data = GxtBuilder::new()
            .p8_palette(vec![0; P8_PALETTE_SIZE])
            .texture(
                TestTexture::new(
                    TextureFormat::P8_ABGR,
                    TextureType::Swizzled,
                    4,
                    4,
                    vec![0; 16],
                )
                .with_palette(0)
                .with_mip_count(3),
            )
            .build();
        // 3 levels need 32 bytes but only 16 were written before the palettes.
        assert!(matches!(
            parse_gxt(&data),
            Err(GxtError::TextureDataOutOfBounds { texture: 0, .. })
        ));
    }

    #[test]
    fn indexed_texture_without_palette_fails() {
        let data = GxtBuilder::new()
            .p8_palette(vec![0; P8_PALETTE_SIZE])
            .texture(TestTexture::new(
                TextureFormat::P8_ABGR,
                TextureType::Swizzled,
                4,
                4,
                vec![0; 16],
            ))
            .build();
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::MissingPalette { texture: 0 })
        );
    }

    #[test]
    fn direct_color_texture_with_palette_fails() {
        let data = GxtBuilder::new()
            .p8_palette(vec![0; P8_PALETTE_SIZE])
            .texture(
                TestTexture::new(
                    TextureFormat::U8U8U8U8_ARGB,
                    TextureType::Linear,
                    4,
                    1,
                    // One row padded to 8 texels.
                    vec![0; 32],
                )
                .with_palette(0),
            )
            .build();
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::UnexpectedPalette {
                texture: 0,
                index: 0
            })
        );
    }

    #[test]
    fn p4_texture_binds_small_palette() {
        let data = GxtBuilder::new()
            .p4_palette(vec![1; P4_PALETTE_SIZE])
            .p4_palette(vec![2; P4_PALETTE_SIZE])
            .p8_palette(vec![3; P8_PALETTE_SIZE])
            .texture(
                TestTexture::new(
                    TextureFormat::P4_ABGR,
                    TextureType::Swizzled,
                    4,
                    4,
                    vec![0; 16],
                )
                .with_palette(1),
            )
            .build();
        let gxt = parse_gxt(&data).unwrap();
        let palette = gxt.textures[0].palette.unwrap();
        assert_eq!(palette.kind, PaletteKind::P4);
        assert_eq!(gxt.palettes.resolve(palette).unwrap()[0], 2);
        // 4x4 at 4bpp is 8 bytes, padded to 16.
        assert_eq!(gxt.textures[0].data.len(), 16);
    }

    #[test]
    fn unknown_texture_type_fails() {
        let data = GxtBuilder::new()
            .texture(
                TestTexture::new(
                    TextureFormat::U8U8U8U8_ABGR,
                    TextureType::Swizzled,
                    4,
                    4,
                    vec![0; 64],
                )
                .with_type_code(0x2000_0000),
            )
            .build();
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::UnknownTextureType {
                texture: 0,
                code: 0x2000_0000
            })
        );
    }

    #[test]
    fn unsupported_format_fails() {
        let data = GxtBuilder::new()
            .texture(TestTexture::new(
                TextureFormat::new(0x9000_0000),
                TextureType::Linear,
                4,
                4,
                vec![0; 64],
            ))
            .build();
        assert!(matches!(
            parse_gxt(&data),
            Err(GxtError::UnsupportedFormat { texture: 0, .. })
        ));
    }

    #[test]
    fn non_power_of_two_swizzled_texture_fails() {
        let data = GxtBuilder::new()
            .texture(TestTexture::new(
                TextureFormat::U8U8U8U8_ABGR,
                TextureType::Swizzled,
                6,
                4,
                vec![0; 96],
            ))
            .build();
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::Layout {
                texture: 0,
                source: LayoutError::WidthNotPowerOfTwo(6)
            })
        );
    }

    #[test]
    fn border_data_is_skipped() {
        // 4x4 RGBA8: border is 80 texels * 4 bytes.
        let border = vec![0xEE; 80 * 4];
        let payload = (0..64).collect::<Vec<u8>>();
        let data = GxtBuilder::new()
            .texture(
                TestTexture::new(
                    TextureFormat::U8U8U8U8_ABGR,
                    TextureType::Swizzled,
                    4,
                    4,
                    payload.clone(),
                )
                .with_border(border),
            )
            .build();
        let gxt = parse_gxt(&data).unwrap();
        assert!(gxt.textures[0].has_border);
        assert_eq!(gxt.textures[0].data, payload);
    }

    #[test]
    fn border_flag_on_indexed_format_fails() {
        let data = GxtBuilder::new()
            .p8_palette(vec![0; P8_PALETTE_SIZE])
            .texture(
                TestTexture::new(
                    TextureFormat::P8_ABGR,
                    TextureType::Swizzled,
                    4,
                    4,
                    vec![0; 16],
                )
                .with_palette(0)
                .with_border(Vec::new()),
            )
            .build();
        assert_eq!(
            parse_gxt(&data),
            Err(GxtError::Border {
                texture: 0,
                source: BorderError::FormatNotSupported(TextureFormat::P8_ABGR.code())
            })
        );
    }

    #[test]
    fn cube_texture_reads_six_faces() {
        // 8x8 RGBA8, 2 levels: 320 bytes per face, 4 byte face alignment.
        let data = GxtBuilder::new()
            .texture(
                TestTexture::new(
                    TextureFormat::U8U8U8U8_ABGR,
                    TextureType::Cube,
                    8,
                    8,
                    vec![7; 6 * 320],
                )
                .with_mip_count(2),
            )
            .build();
        let gxt = parse_gxt(&data).unwrap();
        let texture = &gxt.textures[0];
        assert_eq!((texture.faces, texture.levels), (6, 2));
        assert_eq!(texture.data.len(), 1920);
        assert_eq!(texture.layout().data_size(), Ok(1920));
    }

    #[test]
    fn zero_mip_count_has_empty_payload() {
        let data = GxtBuilder::new()
            .texture(
                TestTexture::new(
                    TextureFormat::U8U8U8U8_ABGR,
                    TextureType::Linear,
                    8,
                    2,
                    Vec::new(),
                )
                .with_mip_count(0),
            )
            .build();
        let gxt = parse_gxt(&data).unwrap();
        let texture = &gxt.textures[0];
        assert_eq!(texture.levels, 0);
        assert!(texture.data.is_empty());
        assert_eq!(texture.layout().slices(), Ok(Vec::new()));
    }

    #[test]
    fn data_region_smaller_than_texture_table_is_accepted() {
        // Two records make a 64-byte table; the data region holds only 32 bytes.
        let data = GxtBuilder::new()
            .texture(TestTexture::new(
                TextureFormat::U8U8U8U8_ABGR,
                TextureType::Linear,
                8,
                1,
                vec![0; 32],
            ))
            .texture(
                TestTexture::new(
                    TextureFormat::U8U8U8U8_ABGR,
                    TextureType::Linear,
                    8,
                    1,
                    Vec::new(),
                )
                .with_mip_count(0),
            )
            .build();
        assert_eq!(data.len(), GXT_HEADER_SIZE + 2 * TEXTURE_INFO_SIZE + 32);

        let gxt = parse_gxt(&data).unwrap();
        assert_eq!(gxt.textures.len(), 2);
        assert_eq!(gxt.textures[0].data.len(), 32);
    }

    #[test]
    fn texture_info_unpacks_sub_word_fields() {
        let mut record = [0u8; TEXTURE_INFO_SIZE];
        patch_u32(&mut record, INFO_PALETTE_INDEX_OFFSET, PALETTE_INDEX_NONE);
        patch_u32(&mut record, INFO_FLAGS_OFFSET, TEXTURE_FLAG_BORDER);
        patch_u32(&mut record, INFO_DIMENSIONS_OFFSET, 0x0200_0100);
        patch_u32(&mut record, INFO_MIP_COUNT_OFFSET, 0xABCD_EF09);
        let info = read_texture_info(&record);
        assert_eq!((info.width, info.height), (256, 512));
        assert_eq!(info.mip_count, 9);
        assert_eq!(info.palette_index, PALETTE_INDEX_NONE);
        assert!(info.has_border());
    }
}
