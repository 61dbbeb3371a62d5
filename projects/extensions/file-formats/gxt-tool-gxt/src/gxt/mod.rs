/// Container constants and field offsets.
pub mod constants;

/// Determine if a buffer is a GXT container.
pub mod likely_gxt;

/// Palette pools and palette binding.
pub mod palette;

/// Parse a GXT container into owned texture records.
pub mod parse_gxt;

pub use likely_gxt::*;
pub use palette::*;
pub use parse_gxt::*;
