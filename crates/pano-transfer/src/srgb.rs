//! sRGB transfer function.
//!
//! The sRGB curve is piecewise: a linear segment near black (avoiding the
//! infinite slope a pure power curve would have at zero) joined to a
//! power curve with exponent 2.4.
//!
//! This uses the draft-standard breakpoint K0 = 0.03928 rather than the
//! later 0.04045 revision; the two curves agree to well below one 8-bit
//! code value.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Nothing here clamps; out-of-range values pass
//!   through the active segment's formula, and callers clamp before
//!   quantizing.

/// Breakpoint of the encoded-domain linear segment.
const K0: f32 = 0.03928;
/// Offset of the power segment.
const A: f32 = 0.055;
/// Slope of the linear segment.
const PHI: f32 = 12.92;
/// Exponent of the power segment.
const GAMMA: f32 = 2.4;

/// sRGB EOTF: decodes a gamma-encoded value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.03928:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= K0 {
        v / PHI
    } else {
        ((v + A) / (1.0 + A)).powf(GAMMA)
    }
}

/// sRGB OETF: encodes linear light to a gamma-encoded value.
///
/// # Formula
///
/// ```text
/// if L <= 0.03928 / 12.92:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= K0 / PHI {
        l * PHI
    } else {
        (1.0 + A) * l.powf(1.0 / GAMMA) - A
    }
}

/// Applies the sRGB EOTF to each channel of a pixel.
#[inline]
pub fn eotf_rgb(px: pano_core::Rgb) -> pano_core::Rgb {
    pano_core::Rgb::new(eotf(px.r), eotf(px.g), eotf(px.b))
}

/// Applies the sRGB OETF to each channel of a pixel.
#[inline]
pub fn oetf_rgb(px: pano_core::Rgb) -> pano_core::Rgb {
    pano_core::Rgb::new(oetf(px.r), oetf(px.g), oetf(px.b))
}
