//! Rec. 709 transfer functions (ITU-R BT.709).

const THRESHOLD_ENCODED: f32 = 0.081;
const THRESHOLD_LINEAR: f32 = 0.018;

/// Convert a Rec. 709 encoded channel to linear light.
#[inline]
pub fn expand(channel: f32) -> f32 {
    if channel < THRESHOLD_ENCODED {
        channel / 4.5
    } else {
        ((channel + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Convert a linear-light channel to Rec. 709 encoded.
#[inline]
pub fn compress(channel: f32) -> f32 {
    if channel < THRESHOLD_LINEAR {
        4.5 * channel
    } else {
        1.099 * channel.powf(0.45) - 0.099
    }
}
