//! PNG export of the rendered RGBA buffer.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use log::info;

/// Save an 8-bit RGBA buffer (row-major, top row first) as a PNG.
pub fn save_png(rgba: Vec<u8>, width: u32, height: u32, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow!("Buffer does not hold a {}x{} RGBA image", width, height))?;

    image
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;

    info!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}
