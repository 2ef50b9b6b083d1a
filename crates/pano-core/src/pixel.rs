//! Linear-light pixel type.
//!
//! [`Rgb`] holds one pixel as three `f32` intensities proportional to
//! physical radiance. Values are unconstrained: weighted averaging may
//! legitimately push a channel outside [0, 1], and nothing clamps until
//! the final encode.
//!
//! # Example
//!
//! ```rust
//! use pano_core::Rgb;
//!
//! let a = Rgb::new(0.25, 0.5, 1.0);
//! let sum = a * 0.5 + a * 0.5;
//! assert_eq!(sum, a);
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// An RGB pixel in linear light.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red intensity.
    pub r: f32,
    /// Green intensity.
    pub g: f32,
    /// Blue intensity.
    pub b: f32,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new pixel.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray pixel with all channels set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamps each channel to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Returns true if all channels are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Add for Rgb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Rgb {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Rgb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

// Rgb * f32
impl Mul<f32> for Rgb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

// f32 * Rgb
impl Mul<Rgb> for f32 {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: Rgb) -> Rgb {
        rhs * self
    }
}

// Rgb / f32
impl Div<f32> for Rgb {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Rgb> for [f32; 3] {
    #[inline]
    fn from(p: Rgb) -> [f32; 3] {
        p.to_array()
    }
}
