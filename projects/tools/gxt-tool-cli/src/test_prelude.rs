//! Common test imports and utilities for CLI tests
#![allow(unused_imports)]

pub use rstest::rstest;
pub use tempfile::TempDir;

use gxt_tool_common::{TextureFormat, TextureType};
use gxt_tool_gxt::test_utils::{GxtBuilder, TestTexture};
use std::path::PathBuf;

/// Writes a container with one 4x4 RGBA texture to `dir` and returns its path.
pub fn write_container(dir: &TempDir) -> PathBuf {
    let data = GxtBuilder::new()
        .texture(TestTexture::new(
            TextureFormat::U8U8U8U8_ABGR,
            TextureType::Swizzled,
            4,
            4,
            vec![0xFF; 64],
        ))
        .build();
    let path = dir.path().join("in.gxt");
    std::fs::write(&path, data).unwrap();
    path
}
