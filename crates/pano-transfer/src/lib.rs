//! # pano-transfer
//!
//! Transfer functions for converting between encoded and linear-light
//! pixel values.
//!
//! # Terminology
//!
//! - **EOTF**: Encoded -> Linear (decoding for processing)
//! - **OETF**: Linear -> Encoded (encoding for storage/display)
//!
//! The panorama pipeline decodes every input channel to linear light
//! before resampling (weighted averaging is only physically meaningful in
//! linear light) and re-encodes on output.
//!
//! # Usage
//!
//! ```rust
//! use pano_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `pano-io` - PPM decoding/encoding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
