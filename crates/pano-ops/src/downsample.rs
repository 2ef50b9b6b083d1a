//! Sphere-aware downsampling for equirectangular panoramas.
//!
//! Equirectangular images oversample longitude near the poles: a full row
//! of pixels at the top of the image collapses onto a tiny circle on the
//! sphere. Naive box or nearest-neighbor downsampling aliases badly there,
//! because many input columns map to almost the same direction.
//!
//! [`downsample`] instead reconstructs, for every output pixel, the
//! corresponding direction on the unit sphere and averages input samples
//! over a small tangent-plane neighborhood of that direction. The
//! neighborhood is walked on a square grid of offsets, each offset is
//! pushed back onto the sphere and projected into input-image
//! coordinates, and samples are blended under an isotropic Gaussian. The
//! grid half-width scales with `1/sin(colatitude)` so the angular
//! footprint stays roughly uniform from equator to pole.
//!
//! # Example
//!
//! ```rust
//! use pano_core::{Image, Rgb};
//! use pano_ops::downsample;
//!
//! let mut input = Image::new(8, 4);
//! input.fill(Rgb::new(0.2, 0.4, 0.6));
//! let output = downsample(&input, 4, 2).unwrap();
//! assert_eq!(output.width(), 4);
//! ```

use crate::{OpsError, OpsResult};
use pano_core::{Image, Rgb};
use pano_math::{Angular, TangentBasis};
use std::f32::consts::PI;
use tracing::debug;

/// Widest allowed kernel multiplier near the poles.
///
/// `1/sin(colatitude)` diverges at the poles; capping it bounds the
/// worst-case kernel cost per output pixel.
const MAX_LATITUDE_WEIGHT: f32 = 8.0;

/// Downsamples an equirectangular panorama to `dst_w` x `dst_h`.
///
/// Pure function of the input buffer; output rows are computed
/// independently (in parallel with the `parallel` feature).
///
/// # Errors
///
/// - [`OpsError::InvalidDimensions`] if either target dimension is zero
/// - [`OpsError::Upscale`] if the target exceeds the input in either
///   dimension; upsampling is out of scope
pub fn downsample(input: &Image, dst_w: u32, dst_h: u32) -> OpsResult<Image> {
    let src_w = input.width();
    let src_h = input.height();

    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "output size must be > 0".into(),
        ));
    }
    if dst_w > src_w || dst_h > src_h {
        return Err(OpsError::Upscale {
            src_w,
            src_h,
            dst_w,
            dst_h,
        });
    }

    // Worst-case downscale ratio across both axes, fixed for the image.
    let radius = kernel_radius(src_w, src_h, dst_w, dst_h);
    // Angular step per kernel offset unit, consistent with both axes.
    let delta = 1.0 / (src_w as f32 / 2.0).max(src_h as f32);

    debug!(src_w, src_h, dst_w, dst_h, radius, delta, "downsample");

    let mut output = Image::new(dst_w, dst_h);

    let resample_row = |oj: usize, row: &mut [Rgb]| {
        let v = (oj as f32 + 0.5) / dst_h as f32;
        let lat_weight = latitude_weight(v);
        let r = radius as f32 * lat_weight;
        let half_width = r as i32;

        for (oi, out) in row.iter_mut().enumerate() {
            let u = (oi as f32 + 0.5) / dst_w as f32;
            let center = Angular::new(u, v).to_direction();
            let basis = TangentBasis::at(center);

            let mut sum = Rgb::ZERO;
            let mut weight_sum = 0.0f32;
            for aj in -half_width..=half_width {
                for ai in -half_width..=half_width {
                    let dir = basis.displace(center, delta * ai as f32, delta * aj as f32);
                    let ap = Angular::from_direction(dir);
                    // u can land exactly on 1.0 at the seam and v on 1.0
                    // at the south pole; clamp after truncation.
                    let ii = ((ap.u * src_w as f32) as u32).min(src_w - 1);
                    let ij = ((ap.v * src_h as f32) as u32).min(src_h - 1);

                    let w = gauss(ai, aj, r);
                    sum += input.pixel(ii, ij) * w;
                    weight_sum += w;
                }
            }
            // The center sample always contributes a positive weight.
            *out = sum / weight_sum;
        }
    };

    let width = dst_w as usize;
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        output
            .pixels_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(oj, row)| resample_row(oj, row));
    }
    #[cfg(not(feature = "parallel"))]
    for (oj, row) in output.pixels_mut().chunks_mut(width).enumerate() {
        resample_row(oj, row);
    }

    Ok(output)
}

/// Integer kernel radius for the worst-case downscale ratio.
///
/// Zero when output resolution matches input on the limiting axis, in
/// which case sampling degenerates to a point sample per output pixel.
#[inline]
fn kernel_radius(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> u32 {
    let ratio = (src_w as f32 / dst_w as f32).max(src_h as f32 / dst_h as f32);
    (ratio / 2.0) as u32
}

/// Kernel width multiplier for an output row at normalized colatitude `v`.
///
/// Compensates for the convergence of longitude lines toward the poles,
/// capped at [`MAX_LATITUDE_WEIGHT`].
#[inline]
fn latitude_weight(v: f32) -> f32 {
    (1.0 / (v * PI).sin()).min(MAX_LATITUDE_WEIGHT)
}

/// Isotropic Gaussian over integer kernel offsets, with sigma at a third
/// of the kernel radius `r`. A non-positive radius means point sampling.
#[inline]
fn gauss(ai: i32, aj: i32, r: f32) -> f32 {
    if r <= 0.0 {
        return 1.0;
    }
    let sigma = r / 3.0;
    let d2 = (ai * ai + aj * aj) as f32;
    (-d2 / (2.0 * sigma * sigma)).exp() / (2.0 * PI * sigma * sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, px: Rgb) -> Image {
        let mut img = Image::new(w, h);
        img.fill(px);
        img
    }

    #[test]
    fn test_kernel_radius() {
        assert_eq!(kernel_radius(8, 4, 8, 4), 0);
        assert_eq!(kernel_radius(8, 4, 4, 2), 1);
        assert_eq!(kernel_radius(16, 8, 4, 2), 2);
        // Worst axis wins.
        assert_eq!(kernel_radius(16, 8, 16, 2), 2);
    }

    #[test]
    fn test_latitude_weight_capped_at_pole() {
        // 1/sin(0) is unbounded; the cap must hold.
        assert_eq!(latitude_weight(0.0), MAX_LATITUDE_WEIGHT);
        assert_eq!(latitude_weight(1.0), MAX_LATITUDE_WEIGHT);
        // Mid-latitudes stay below the cap and above 1.
        let w = latitude_weight(0.5);
        assert!((w - 1.0).abs() < 1e-6);
        assert!(latitude_weight(0.25) > 1.0);
        assert!(latitude_weight(0.25) < MAX_LATITUDE_WEIGHT);
    }

    #[test]
    fn test_gauss_point_sample() {
        assert_eq!(gauss(0, 0, 0.0), 1.0);
    }

    #[test]
    fn test_gauss_decreases_with_distance() {
        let r = 3.0;
        let center = gauss(0, 0, r);
        let edge = gauss(3, 0, r);
        assert!(center > edge);
        assert!(edge > 0.0);
    }

    #[test]
    fn test_solid_color_invariant() {
        // Any weighted average of a uniform image is the same color.
        let red = Rgb::new(0.8, 0.05, 0.05);
        let out = downsample(&solid(4, 4, red), 2, 2).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                let px = out.pixel(x, y);
                assert!((px.r - red.r).abs() < 1e-5);
                assert!((px.g - red.g).abs() < 1e-5);
                assert!((px.b - red.b).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_identity_size_is_exact() {
        // Equal resolution on both axes gives radius 0: point sampling
        // lands back on the same pixel.
        let mut img = Image::new(8, 4);
        for y in 0..4 {
            for x in 0..8 {
                img.set_pixel(x, y, Rgb::new(x as f32, y as f32, 0.5));
            }
        }
        let out = downsample(&img, 8, 4).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_rejects_upscale() {
        let img = solid(4, 4, Rgb::ONE);
        assert!(matches!(
            downsample(&img, 8, 4),
            Err(OpsError::Upscale { .. })
        ));
        assert!(matches!(
            downsample(&img, 4, 8),
            Err(OpsError::Upscale { .. })
        ));
        assert!(downsample(&img, 4, 4).is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let img = solid(4, 4, Rgb::ONE);
        assert!(matches!(
            downsample(&img, 0, 2),
            Err(OpsError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_output_finite_including_pole_rows() {
        // Pole rows use the widest kernels; every pixel must still come
        // out finite and inside the input's value range.
        let mut img = Image::new(16, 8);
        for y in 0..8 {
            for x in 0..16 {
                let v = ((x + y) % 2) as f32;
                img.set_pixel(x, y, Rgb::new(v, 1.0 - v, 0.5));
            }
        }
        let out = downsample(&img, 4, 2).unwrap();
        for px in out.pixels() {
            assert!(px.is_finite());
            assert!(px.r >= 0.0 && px.r <= 1.0);
            assert!(px.g >= 0.0 && px.g <= 1.0);
        }
    }
}
