//! # pano-core
//!
//! Core types for spherical panorama processing.
//!
//! This crate provides the foundational types the rest of the workspace
//! builds on:
//!
//! - [`Rgb`] - a linear-light pixel (three unconstrained `f32` channels)
//! - [`Image`] - an owned, row-major pixel buffer with fixed dimensions
//! - [`Error`] / [`Result`] - buffer construction and bounds errors
//!
//! ## Ownership model
//!
//! Buffers are exclusively owned: allocated once at fixed dimensions,
//! written by one producer, then read by one consumer. Nothing here is
//! reference counted or shared.
//!
//! ## Used By
//!
//! - `pano-transfer` - linearize/encode pixel values
//! - `pano-io` - PPM decode/encode
//! - `pano-ops` - the spherical resampler

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::Rgb;
