//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Requested output exceeds the input in at least one dimension.
    #[error("output {dst_w}x{dst_h} must be smaller or equal to input {src_w}x{src_h}")]
    Upscale {
        /// Input width.
        src_w: u32,
        /// Input height.
        src_h: u32,
        /// Requested output width.
        dst_w: u32,
        /// Requested output height.
        dst_h: u32,
    },
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
