//! Randomness source for sampling.
//!
//! Every function takes the generator explicitly so each render worker can
//! own an independent stream. There is no global generator.

use orb_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::{RenderError, RenderResult};

/// Consecutive rejections after which the underlying generator is assumed
/// broken. A sound uniform source fails a trial with p ~ 0.476, so it
/// reaches this bound with probability far below 1e-3000.
const DEFECTIVE_SOURCE_REJECTIONS: u32 = 10_000;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn uniform(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Rejection-sample a point strictly inside the unit ball.
///
/// Takes ~1.91 trials on average (cube volume / ball volume).
///
/// Fails with [`RenderError::DefectiveRandomSource`] if the generator
/// produces `DEFECTIVE_SOURCE_REJECTIONS` rejected candidates in a row,
/// which only a defective source does.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> RenderResult<Vec3> {
    let mut rejections = 0;
    loop {
        let p = Vec3::new(
            uniform(rng, -1.0, 1.0),
            uniform(rng, -1.0, 1.0),
            uniform(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return Ok(p);
        }

        rejections += 1;
        if rejections == DEFECTIVE_SOURCE_REJECTIONS {
            return Err(RenderError::DefectiveRandomSource { rejections });
        }
    }
}

/// Independent, reproducible stream for one scanline of a render.
///
/// Depends only on the render seed and the row, so serial and parallel
/// renders consume identical samples per pixel.
pub fn scanline_rng(seed: u64, row: u32) -> StdRng {
    StdRng::seed_from_u64(seed ^ (row as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
