//! sRGB transfer functions (IEC 61966-2-1:1999).

const THRESHOLD_ENCODED: f32 = 0.04045;
const THRESHOLD_LINEAR: f32 = 0.003_130_8;

/// Convert an sRGB-encoded channel to linear light.
///
/// The formula is evaluated as written for out-of-[0, 1] inputs; negative
/// values fall on the linear segment and extrapolate, values above 1 follow
/// the power segment.
#[inline]
pub fn expand(channel: f32) -> f32 {
    if channel <= THRESHOLD_ENCODED {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear-light channel to sRGB-encoded.
#[inline]
pub fn compress(channel: f32) -> f32 {
    if channel <= THRESHOLD_LINEAR {
        12.92 * channel
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

/// f64 expand, used to build the lookup tables at full precision.
#[inline]
pub(crate) fn expand_f64(channel: f64) -> f64 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// f64 compress, used to build the lookup tables at full precision.
#[inline]
pub(crate) fn compress_f64(channel: f64) -> f64 {
    if channel <= 0.0031308 {
        12.92 * channel
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // Mid-gray: 0.5 encoded ≈ 0.214041 linear
        assert!((expand(0.5) - 0.214_041).abs() < 1e-5);
        assert!((compress(0.214_041) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(expand(0.0), 0.0);
        assert!((expand(1.0) - 1.0).abs() < 1e-6);
        assert_eq!(compress(0.0), 0.0);
        assert!((compress(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip_across_breakpoint() {
        for &x in &[0.0, 0.002, 0.04, 0.040_45, 0.041, 0.1, 0.5, 0.9, 1.0] {
            let linear = expand(x);
            let back = compress(linear);
            assert!(
                (back - x).abs() < 1e-5,
                "roundtrip failed at {}: {} -> {} -> {}",
                x,
                x,
                linear,
                back
            );
        }
    }

    #[test]
    fn test_negative_extrapolates() {
        // Negative inputs stay on the linear segment
        assert!((expand(-0.01) - (-0.01 / 12.92)).abs() < 1e-9);
        assert!((compress(-0.001) - (12.92 * -0.001)).abs() < 1e-9);
    }

    #[test]
    fn test_f64_f32_agree() {
        for i in 0..=64 {
            let x = i as f32 / 64.0;
            assert!((expand(x) as f64 - expand_f64(x as f64)).abs() < 1e-6);
            assert!((compress(x) as f64 - compress_f64(x as f64)).abs() < 1e-6);
        }
    }
}
