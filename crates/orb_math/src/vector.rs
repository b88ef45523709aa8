//! Checked vector helpers layered on top of glam.

use crate::Vec3;
use thiserror::Error;

/// Errors raised by vector operations that have no meaningful result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector { x: f32, y: f32, z: f32 },
}

/// Scale `v` to unit length.
///
/// Fails when the length is zero or not finite, instead of handing back a
/// NaN vector that would poison every accumulated sample downstream.
#[inline]
pub fn unit_vector(v: Vec3) -> Result<Vec3, MathError> {
    v.try_normalize().ok_or(MathError::DegenerateVector {
        x: v.x,
        y: v.y,
        z: v.z,
    })
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// True if every component is within 1e-8 of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    const S: f32 = 1e-8;
    v.x.abs() < S && v.y.abs() < S && v.z.abs() < S
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector_has_unit_length() {
        let samples = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -3.0),
            Vec3::new(1e-3, 0.0, 0.0),
            Vec3::new(1e4, -2e4, 5e3),
        ];

        for v in samples {
            let u = unit_vector(v).unwrap();
            assert!((u.length() - 1.0).abs() < 1e-6, "{:?} -> {:?}", v, u);
            // Same direction
            assert!(u.dot(v) > 0.0);
        }
    }

    #[test]
    fn test_unit_vector_rejects_zero() {
        let err = unit_vector(Vec3::ZERO).unwrap_err();
        assert_eq!(
            err,
            MathError::DegenerateVector {
                x: 0.0,
                y: 0.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn test_unit_vector_rejects_non_finite() {
        assert!(unit_vector(Vec3::new(f32::NAN, 1.0, 0.0)).is_err());
        assert!(unit_vector(Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;

        assert_eq!(reflect(v, n), Vec3::new(1.0, 1.0, 0.0));
        // Head-on reflection reverses the vector
        assert_eq!(reflect(Vec3::new(0.0, 0.0, -2.0), Vec3::Z), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::splat(1e-9)));
        assert!(!near_zero(Vec3::new(0.0, 1e-3, 0.0)));
    }
}
