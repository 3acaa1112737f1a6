//! Pure power-function transfer with a caller-supplied exponent.
//!
//! Unlike sRGB/Rec. 709 there is no linear segment near black. The raw
//! formula is evaluated as written; negative inputs yield NaN from `powf`,
//! matching the documented extrapolation policy rather than clamping.

/// Convert a gamma-encoded channel to linear light: `channel^gamma`.
#[inline]
pub fn expand(channel: f32, gamma: f32) -> f32 {
    channel.powf(gamma)
}

/// Convert a linear-light channel to gamma-encoded: `channel^(1/gamma)`.
#[inline]
pub fn compress(channel: f32, gamma: f32) -> f32 {
    channel.powf(1.0 / gamma)
}
