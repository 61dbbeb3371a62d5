//! Common test imports and utilities for export tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;
pub use tempfile::TempDir;

// Container builder and parser
pub use gxt_tool_gxt::test_utils::{patch_u32, GxtBuilder, TestTexture};
pub use gxt_tool_gxt::{parse_gxt, GxtTexture, PaletteKind};

// Types from the layout crate
pub use gxt_tool_common::{ChannelOrder, TextureFormat, TextureType};

use crate::encode::ImageEncoder;
use crate::error::ExportResult;
use image::RgbaImage;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Builds a container holding `texture` alone and returns the parsed texture.
pub fn parse_single(texture: TestTexture) -> GxtTexture {
    let data = GxtBuilder::new().texture(texture).build();
    parse_gxt(&data).unwrap().textures.remove(0)
}

/// A 4x4 swizzled P8 texture with indices `0..16` and a palette whose entry 0 is
/// opaque red and entry `i` is `[i, i, i, 255]` otherwise.
pub fn minimal_p8_container() -> Vec<u8> {
    let mut palette: Vec<u8> = (0..=255u8).flat_map(|i| [i, i, i, 255]).collect();
    palette[..4].copy_from_slice(&[255, 0, 0, 255]);
    GxtBuilder::new()
        .p8_palette(palette)
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

/// Keeps encoded images in memory instead of writing them.
#[derive(Debug, Default)]
pub struct RecordingEncoder {
    images: RefCell<Vec<(PathBuf, RgbaImage)>>,
}

impl RecordingEncoder {
    /// Images received so far, with the paths they were meant for.
    pub fn images(&self) -> Vec<(PathBuf, RgbaImage)> {
        self.images.borrow().clone()
    }
}

impl ImageEncoder for RecordingEncoder {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn encode(&self, image: &RgbaImage, path: &Path) -> ExportResult<()> {
        self.images
            .borrow_mut()
            .push((path.to_path_buf(), image.clone()));
        Ok(())
    }
}
