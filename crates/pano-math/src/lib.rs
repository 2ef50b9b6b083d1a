//! # pano-math
//!
//! Math primitives for equirectangular panorama processing:
//!
//! - [`Vec3`] - Cartesian directions with cross/normalize/orthogonal
//! - [`Angular`] - normalized longitude/colatitude coordinates
//! - [`TangentBasis`] - local 2D frame on the sphere
//!
//! # Design
//!
//! Plain value types with pure methods; no dynamic dispatch anywhere.
//! [`Vec3`] converts to and from [`glam`] vectors for callers that live
//! in a glam world.
//!
//! # Used By
//!
//! - `pano-ops` - the spherical downsampler

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod sphere;
mod vec3;

pub use sphere::{Angular, TangentBasis};
pub use vec3::Vec3;
