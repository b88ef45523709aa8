//! Parallel scanline rendering.
//!
//! Each scanline owns its slice of the output buffer and its own random
//! stream, so rows render independently on the rayon pool with no locking.
//! The result matches [`render`](crate::render) byte for byte.

use rayon::prelude::*;

use crate::renderer::render_scanline;
use crate::{Camera, Hittable, PixelBuffer, RenderConfig, RenderResult};

/// Render the entire scene into `buffer` using the current rayon pool.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    buffer: &mut PixelBuffer,
) -> RenderResult<()> {
    config.validate()?;

    let size = (buffer.width(), buffer.height());
    let channels = buffer.format().channels();
    let stride = buffer.row_stride();
    log::debug!(
        "rendering {}x{} @ {} spp on {} threads",
        size.0,
        size.1,
        config.samples_per_pixel,
        rayon::current_num_threads()
    );

    buffer
        .data_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| render_scanline(row, y as u32, size, channels, camera, world, config))?;

    log::debug!("render complete");
    Ok(())
}
