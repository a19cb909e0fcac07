/// Raster output through the `image` crate
use crate::config;
use crate::error::QrError;
use crate::models::QrSymbol;
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

/// Raster output options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Pixels per module edge
    pub scale: usize,
    /// Light border in modules on every side
    pub quiet_zone: usize,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: config::png_scale(),
            quiet_zone: config::quiet_zone(),
        }
    }
}

/// Grayscale image, black modules on white
pub fn to_image(symbol: &QrSymbol, options: &RasterOptions) -> GrayImage {
    let scale = options.scale.max(1);
    let quiet = options.quiet_zone;
    let side = (symbol.module_count + 2 * quiet) * scale;

    GrayImage::from_fn(side as u32, side as u32, |px, py| {
        let col = (px as usize / scale).checked_sub(quiet);
        let row = (py as usize / scale).checked_sub(quiet);
        let dark = match (row, col) {
            (Some(row), Some(col)) if row < symbol.module_count && col < symbol.module_count => {
                symbol.is_dark(row, col)
            }
            _ => false,
        };
        Luma([if dark { 0 } else { 255 }])
    })
}

/// PNG-encoded bytes
pub fn to_png_bytes(symbol: &QrSymbol, options: &RasterOptions) -> Result<Vec<u8>, QrError> {
    let image = to_image(symbol, options);
    let mut bytes = std::io::Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write a PNG file
pub fn save_png<P: AsRef<Path>>(
    symbol: &QrSymbol,
    path: P,
    options: &RasterOptions,
) -> Result<(), QrError> {
    to_image(symbol, options).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
