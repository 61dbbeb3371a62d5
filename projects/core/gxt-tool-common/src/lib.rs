#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

/// Errors produced while classifying formats and computing layouts.
pub mod error;

/// Static catalog of GXM texture formats.
pub mod format;

/// Texture memory layout types (swizzled, cube, linear, ...).
pub mod texture_type;

/// Size of the border data stored ahead of border-enabled textures.
pub mod border;

/// Texture payload size and per-slice offset calculation.
pub mod layout;

pub use border::border_data_size;
pub use error::{BorderError, FormatError, LayoutError, TextureTypeError};
pub use format::{classify, BaseFormat, ChannelOrder, FormatDescriptor, TextureFormat};
pub use layout::{texture_data_size, texture_slices, LayoutSlice, TextureLayout};
pub use texture_type::TextureType;
