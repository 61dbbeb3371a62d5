//! Common test imports and utilities for layout tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::format::{classify, BaseFormat, FormatDescriptor, TextureFormat};
pub use crate::texture_type::TextureType;

/// Shorthand for a format code made of a base format and no swizzle.
pub(crate) fn base_format(base: BaseFormat) -> TextureFormat {
    TextureFormat::new(base.bits())
}
