//! Rec. 2020 transfer functions (ITU-R BT.2020).
//!
//! Same curve shape as Rec. 709 but with the higher-precision alpha/beta
//! constants from the BT.2020 specification.

const ALPHA: f32 = 1.099_296_8;
const BETA: f32 = 0.018_053_97;

/// Convert a Rec. 2020 encoded channel to linear light.
#[inline]
pub fn expand(channel: f32) -> f32 {
    if channel < BETA * 4.5 {
        channel / 4.5
    } else {
        ((channel + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    }
}

/// Convert a linear-light channel to Rec. 2020 encoded.
#[inline]
pub fn compress(channel: f32) -> f32 {
    if channel < BETA {
        4.5 * channel
    } else {
        ALPHA * channel.powf(0.45) - (ALPHA - 1.0)
    }
}
