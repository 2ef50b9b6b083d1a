//! Equirectangular sphere projection.
//!
//! An equirectangular panorama maps normalized longitude `u` linearly to
//! the horizontal axis and normalized colatitude `v` to the vertical axis.
//! [`Angular`] holds that coordinate pair; the conversions to and from
//! unit-sphere directions are exact inverses everywhere except the poles,
//! where longitude is degenerate (every `u` collapses to the same point).
//!
//! # Conventions
//!
//! - `u` in [0, 1): longitude, wrapping at the seam
//! - `v` in [0, 1]: colatitude, `v = 0` at the +Y pole, `v = 1` at -Y
//!
//! # Usage
//!
//! ```rust
//! use pano_math::Angular;
//!
//! let a = Angular::new(0.25, 0.5);
//! let d = a.to_direction();
//! let b = Angular::from_direction(d);
//! assert!((a.u - b.u).abs() < 1e-6 && (a.v - b.v).abs() < 1e-6);
//! ```

use crate::Vec3;
use std::f32::consts::PI;

/// A normalized angular coordinate on the equirectangular rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angular {
    /// Normalized longitude in [0, 1).
    pub u: f32,
    /// Normalized colatitude in [0, 1].
    pub v: f32,
}

impl Angular {
    /// Creates a new angular coordinate.
    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Maps this angular coordinate to its unit-sphere direction.
    ///
    /// The result has length 1 for any input.
    #[inline]
    pub fn to_direction(self) -> Vec3 {
        let colat = self.v * PI;
        let lon = (self.u - 0.5) * 2.0 * PI;
        let s = colat.sin();
        Vec3::new(s * lon.cos(), colat.cos(), s * lon.sin())
    }

    /// Maps a unit-sphere direction back to its angular coordinate.
    ///
    /// Inverse of [`to_direction`](Self::to_direction) away from the
    /// poles. `atan2` makes longitude wraparound implicit; at the poles
    /// the returned `u` is arbitrary. `u` can land exactly on 1.0 at the
    /// seam (`atan2` returning pi), so callers converting to pixel
    /// indices must clamp.
    #[inline]
    pub fn from_direction(dir: Vec3) -> Self {
        Self {
            u: 0.5 + dir.z.atan2(dir.x) / (2.0 * PI),
            v: dir.y.clamp(-1.0, 1.0).acos() / PI,
        }
    }
}

/// A pair of orthogonal unit vectors spanning the plane tangent to the
/// sphere at some direction.
///
/// Built fresh per sample point and never persisted; parameterizes the
/// locally Euclidean neighborhood a resampling kernel walks over.
#[derive(Debug, Clone, Copy)]
pub struct TangentBasis {
    /// First tangent vector, orthogonal to the direction.
    pub orth0: Vec3,
    /// Second tangent vector, orthogonal to both.
    pub orth1: Vec3,
}

impl TangentBasis {
    /// Constructs the tangent basis at a unit direction.
    #[inline]
    pub fn at(dir: Vec3) -> Self {
        let orth0 = dir.orthogonal();
        let orth1 = orth0.cross(dir);
        Self { orth0, orth1 }
    }

    /// Displaces `dir` by `a * orth0 + b * orth1` and renormalizes onto
    /// the sphere.
    #[inline]
    pub fn displace(&self, dir: Vec3, a: f32, b: f32) -> Vec3 {
        (dir + self.orth0 * a + self.orth1 * b).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_sphere_invariant() {
        for j in 0..=20 {
            for i in 0..20 {
                let a = Angular::new(i as f32 / 20.0, j as f32 / 20.0);
                assert_relative_eq!(a.to_direction().length(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_projection_inverse_interior() {
        // Away from the poles the mapping is a bijection.
        for j in 1..20 {
            for i in 0..20 {
                let a = Angular::new(i as f32 / 20.0, j as f32 / 20.0);
                let b = Angular::from_direction(a.to_direction());
                // Longitude distance on the circle, tolerant of the seam.
                let du = (a.u - b.u).rem_euclid(1.0);
                assert!(du.min(1.0 - du) < 1e-5, "u {} came back as {}", a.u, b.u);
                assert_relative_eq!(a.v, b.v, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_cardinal_directions() {
        // v = 0 is the +Y pole, v = 1 the -Y pole.
        let north = Angular::new(0.3, 0.0).to_direction();
        assert_relative_eq!(north.y, 1.0, epsilon = 1e-6);
        let south = Angular::new(0.7, 1.0).to_direction();
        assert_relative_eq!(south.y, -1.0, epsilon = 1e-6);

        // u = 0.5 on the equator looks down +X.
        let fwd = Angular::new(0.5, 0.5).to_direction();
        assert_relative_eq!(fwd.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pole_colatitude_recovered() {
        // u is arbitrary at the poles but v must still come back.
        let a = Angular::from_direction(Vec3::Y);
        assert_relative_eq!(a.v, 0.0, epsilon = 1e-6);
        let b = Angular::from_direction(-Vec3::Y);
        assert_relative_eq!(b.v, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tangent_basis() {
        let dir = Angular::new(0.37, 0.21).to_direction();
        let basis = TangentBasis::at(dir);
        assert_relative_eq!(basis.orth0.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(basis.orth1.length(), 1.0, epsilon = 1e-5);
        assert!(basis.orth0.dot(dir).abs() < 1e-5);
        assert!(basis.orth1.dot(dir).abs() < 1e-5);
        assert!(basis.orth0.dot(basis.orth1).abs() < 1e-5);

        let moved = basis.displace(dir, 0.01, -0.02);
        assert_relative_eq!(moved.length(), 1.0, epsilon = 1e-5);
    }
}
