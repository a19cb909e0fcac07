//! Output formats for encoded symbols
//!
//! - Path data for embedding in a caller's SVG
//! - Standalone SVG documents sized in millimetres
//! - PNG rasters via the `image` crate
//! - Half-block terminal art

/// Terminal rendering
pub mod ascii;
/// Unit-square path serialization
pub mod path;
/// Raster images
pub mod png;
/// SVG documents
pub mod svg;

pub use ascii::to_ascii;
pub use path::to_path;
pub use png::{RasterOptions, save_png, to_image, to_png_bytes};
pub use svg::{SvgOptions, to_svg};
