#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

/// Container builder for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Parse errors.
pub mod error;

/// GXT container parsing.
pub mod gxt;

pub use error::{GxtError, GxtResult};
pub use gxt::*;
