//! # pano-io
//!
//! Image I/O for the panorama pipeline.
//!
//! One format is supported: binary PPM (P6), 8 bits per channel. Decoding
//! linearizes every channel through the sRGB EOTF; encoding applies the
//! OETF and quantizes, so library code only ever sees linear light.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pano_io::ppm;
//!
//! let image = ppm::read("input.ppm")?;
//! ppm::write("copy.ppm", &image)?;
//! # Ok::<(), pano_io::IoError>(())
//! ```
//!
//! # Dependencies
//!
//! - `pano-core` - the `Image` buffer
//! - `pano-transfer` - sRGB transfer functions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ppm;

pub use error::{IoError, IoResult};
