//! The export pipeline: select slice, expand palette indices, reorder, transcode, encode.

use crate::deswizzle::deswizzle;
use crate::encode::{ImageEncoder, PngEncoder};
use crate::error::{ExportError, ExportResult};
use crate::expand::{expand_indexed, EXPANDED_TEXEL_SIZE};
use crate::slice::{slice_bytes, texture_slices};
use crate::transcode::{PixelMetadata, PixelTranscoder, Rgba8Transcoder};
use gxt_tool_common::{BaseFormat, LayoutSlice, TextureType};
use gxt_tool_gxt::{GxtFile, GxtTexture, PaletteKind, PaletteRef};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory the images are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Also export mip levels below the top one.
    pub all_levels: bool,
    /// Reorder Morton-swizzled textures into row-major order.
    pub deswizzle: bool,
}

impl ExportOptions {
    /// Top level only, no reordering.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            all_levels: false,
            deswizzle: false,
        }
    }
}

/// Exports the textures of a parsed container as images.
#[derive(Debug, Clone)]
pub struct Exporter<T = Rgba8Transcoder, E = PngEncoder> {
    options: ExportOptions,
    transcoder: T,
    encoder: E,
}

impl Exporter {
    /// An exporter writing PNG files.
    pub fn new(options: ExportOptions) -> Self {
        Self::with_collaborators(options, Rgba8Transcoder, PngEncoder)
    }
}

impl<T: PixelTranscoder, E: ImageEncoder> Exporter<T, E> {
    /// An exporter using the given transcoder and encoder.
    pub fn with_collaborators(options: ExportOptions, transcoder: T, encoder: E) -> Self {
        Self {
            options,
            transcoder,
            encoder,
        }
    }

    /// The options this exporter runs with.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Writes the top level of every face of every texture (every level when
    /// `all_levels` is set), returning the written paths in order.
    ///
    /// Stops at the first failing texture; files already written are kept.
    pub fn export(&self, gxt: &GxtFile) -> ExportResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.options.output_dir)?;

        let mut written = Vec::new();
        for (index, texture) in gxt.textures.iter().enumerate() {
            if texture.levels == 0 {
                warn!("texture {index}: no mip levels, skipped");
                continue;
            }
            ensure_exportable(index, texture)?;
            let palette = match texture.palette {
                Some(palette) => Some(resolve_palette(index, gxt, palette)?),
                None if texture.descriptor.is_indexed => {
                    return Err(ExportError::MissingPalette { texture: index })
                }
                None => None,
            };
            self.warn_if_not_deswizzled(index, texture);

            for slice in texture_slices(index, texture)? {
                if slice.level > 0 && !self.options.all_levels {
                    continue;
                }
                let name = if slice.level == 0 {
                    format!("{index}_{}", slice.face)
                } else {
                    format!("{index}_{}_{}", slice.face, slice.level)
                };
                written.push(self.export_slice(index, texture, &slice, palette, &name)?);
            }
        }

        Ok(written)
    }

    /// Writes the top level of every face of every indexed texture once per palette
    /// in the texture's pool, as `<texture>_<face>_p<palette>`.
    pub fn export_palette_test(&self, gxt: &GxtFile) -> ExportResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.options.output_dir)?;

        let mut written = Vec::new();
        for (index, texture) in gxt.textures.iter().enumerate() {
            if !texture.descriptor.is_indexed || texture.levels == 0 {
                debug!("texture {index}: not indexed or no mip levels, skipped");
                continue;
            }
            ensure_exportable(index, texture)?;
            self.warn_if_not_deswizzled(index, texture);

            let kind = PaletteKind::for_bits_per_pixel(texture.descriptor.bits_per_pixel);
            let top_levels: Vec<LayoutSlice> = texture_slices(index, texture)?
                .into_iter()
                .filter(|slice| slice.level == 0)
                .collect();

            for palette_ref in gxt.palettes.refs(kind) {
                let palette = resolve_palette(index, gxt, palette_ref)?;
                for slice in &top_levels {
                    let name = format!("{index}_{}_p{}", slice.face, palette_ref.index);
                    written.push(self.export_slice(index, texture, slice, Some(palette), &name)?);
                }
            }
        }

        Ok(written)
    }

    fn export_slice(
        &self,
        index: usize,
        texture: &GxtTexture,
        slice: &LayoutSlice,
        palette: Option<&[u8]>,
        name: &str,
    ) -> ExportResult<PathBuf> {
        debug!(
            "texture {index}: face {} level {} at {:#X}+{:#X} ({}x{}, stride {}x{})",
            slice.face,
            slice.level,
            slice.offset,
            slice.size,
            slice.width,
            slice.height,
            slice.stride_width,
            slice.stride_height
        );

        let pixels = self.decode_slice(index, texture, slice, palette)?;
        let metadata = PixelMetadata {
            width: slice.width,
            height: slice.height,
            stride_width: slice.stride_width,
            stride_height: slice.stride_height,
            channel_order: texture.format.channel_order(),
        };
        let image = self.transcoder.transcode(&pixels, &metadata)?;

        let path = output_path(&self.options.output_dir, name, self.encoder.extension());
        self.encoder.encode(&image, &path)?;
        info!("save: {}", path.display());
        Ok(path)
    }

    /// Produces the 4-byte-per-texel buffer for one slice.
    fn decode_slice(
        &self,
        index: usize,
        texture: &GxtTexture,
        slice: &LayoutSlice,
        palette: Option<&[u8]>,
    ) -> ExportResult<Vec<u8>> {
        let raw = slice_bytes(index, texture, slice)?;
        let pixels = match palette {
            Some(palette) => expand_indexed(
                raw,
                palette,
                texture.descriptor.bits_per_pixel,
                slice.stride_width,
                slice.stride_height,
            ),
            None => raw.to_vec(),
        };

        if self.options.deswizzle && texture.texture_type.is_morton_swizzled() {
            return Ok(deswizzle(
                &pixels,
                slice.stride_width,
                slice.stride_height,
                EXPANDED_TEXEL_SIZE,
            ));
        }
        Ok(pixels)
    }

    fn warn_if_not_deswizzled(&self, index: usize, texture: &GxtTexture) {
        if self.options.deswizzle && stays_swizzled(texture.texture_type) {
            warn!(
                "texture {index}: {:?} textures are exported without deswizzling",
                texture.texture_type
            );
        }
    }
}

/// Non-linear types that deswizzling leaves in their stored order.
fn stays_swizzled(texture_type: TextureType) -> bool {
    matches!(
        texture_type,
        TextureType::Tiled | TextureType::SwizzledArbitrary | TextureType::CubeArbitrary
    )
}

/// Fails for formats the pipeline cannot turn into RGBA8.
fn ensure_exportable(index: usize, texture: &GxtTexture) -> ExportResult<()> {
    match texture.descriptor.base {
        BaseFormat::U8U8U8U8 | BaseFormat::P8 | BaseFormat::P4 => Ok(()),
        _ => Err(ExportError::UnsupportedExportFormat {
            texture: index,
            format: texture.format.code(),
        }),
    }
}

fn resolve_palette(index: usize, gxt: &GxtFile, palette: PaletteRef) -> ExportResult<&[u8]> {
    gxt.palettes
        .resolve(palette)
        .ok_or(ExportError::MissingPalette { texture: index })
}

fn output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}
