//! Image buffer type.
//!
//! [`Image`] is an owned, fixed-size, row-major buffer of linear-light
//! [`Rgb`] pixels. It is allocated once at its final dimensions, fully
//! populated by exactly one producer (a decoder or a resampler), then
//! handed to exactly one consumer (an encoder). There is no sharing and
//! no aliasing between buffers.
//!
//! # Memory Layout
//!
//! Pixels are stored top-to-bottom, left-to-right:
//!
//! ```text
//! index = y * width + x
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pano_core::{Image, Rgb};
//!
//! let mut img = Image::new(4, 2);
//! img.fill(Rgb::new(1.0, 0.0, 0.0));
//! assert_eq!(img.pixel(3, 1), Rgb::new(1.0, 0.0, 0.0));
//! ```

use crate::{Error, Result, Rgb};

/// Owned row-major buffer of linear-light pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![Rgb::ZERO; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates an image from an existing pixel buffer.
    ///
    /// Fails if the buffer length does not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidDimensions(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize] = px;
    }

    /// Bounds-checked pixel access.
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Rgb> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixel(x, y))
    }

    /// Fills every pixel with the same value.
    pub fn fill(&mut self, px: Rgb) {
        self.data.fill(px);
    }

    /// The whole buffer as a slice, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// The whole buffer as a mutable slice, row-major.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Iterates over rows as mutable slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Rgb]> {
        self.data.chunks_exact_mut(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let img = Image::new(3, 2);
        assert_eq!(img.len(), 6);
        assert!(img.pixels().iter().all(|p| *p == Rgb::ZERO));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut img = Image::new(4, 4);
        let px = Rgb::new(0.1, 0.2, 0.3);
        img.set_pixel(2, 3, px);
        assert_eq!(img.pixel(2, 3), px);
        assert_eq!(img.pixel(3, 2), Rgb::ZERO);
    }

    #[test]
    fn test_from_pixels_validates_length() {
        let ok = Image::from_pixels(2, 2, vec![Rgb::ZERO; 4]);
        assert!(ok.is_ok());
        let bad = Image::from_pixels(2, 2, vec![Rgb::ZERO; 5]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_try_pixel_bounds() {
        let img = Image::new(2, 2);
        assert!(img.try_pixel(1, 1).is_ok());
        assert!(matches!(
            img.try_pixel(2, 0),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rows() {
        let mut img = Image::new(2, 3);
        img.set_pixel(0, 1, Rgb::ONE);
        let rows: Vec<_> = img.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], Rgb::ONE);
    }
}
