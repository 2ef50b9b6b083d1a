//! # pano-ops
//!
//! Image operations for equirectangular panoramas.
//!
//! The one operation here is [`downsample`]: projection-aware reduction
//! of a spherical panorama, sampling each output pixel through a
//! tangent-plane Gaussian kernel whose width adapts to the local
//! compression of the equirectangular projection.
//!
//! # Example
//!
//! ```rust
//! use pano_core::{Image, Rgb};
//! use pano_ops::downsample;
//!
//! let mut pano = Image::new(16, 8);
//! pano.fill(Rgb::splat(0.5));
//! let small = downsample(&pano, 8, 4)?;
//! # Ok::<(), pano_ops::OpsError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - resample output rows on the rayon thread pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod downsample;
mod error;

pub use downsample::downsample;
pub use error::{OpsError, OpsResult};
