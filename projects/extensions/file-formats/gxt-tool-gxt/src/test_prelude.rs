//! Common test imports and utilities for GXT tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Container builder
pub use crate::test_utils::{patch_u32, GxtBuilder, TestTexture};

// Types from the layout crate
pub use gxt_tool_common::{classify, TextureFormat, TextureType};
