//! L* (CIE lightness) transfer functions.
//!
//! Used by working spaces such as ECI RGB v2 that encode channels with the
//! same nonlinearity as CIE L*.

use crate::math::{CIE_EPSILON, CIE_KAPPA};

const KAPPA: f32 = CIE_KAPPA as f32;
const EPSILON: f32 = CIE_EPSILON as f32;

/// Convert an L*-encoded channel to linear light.
#[inline]
pub fn expand(channel: f32) -> f32 {
    if channel <= 0.08 {
        100.0 * channel / KAPPA
    } else {
        let f = (channel + 0.16) / 1.16;
        f * f * f
    }
}

/// Convert a linear-light channel to L*-encoded.
#[inline]
pub fn compress(channel: f32) -> f32 {
    if channel <= EPSILON {
        channel * KAPPA / 100.0
    } else {
        1.16 * channel.cbrt() - 0.16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(expand(0.0), 0.0);
        assert!((expand(1.0) - 1.0).abs() < 1e-6);
        assert!((compress(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_breakpoint_continuity() {
        // epsilon linear encodes to 0.08
        assert!((compress(EPSILON) - 0.08).abs() < 1e-6);
        assert!((expand(0.08) - EPSILON).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip_across_breakpoint() {
        for &x in &[0.0, 0.02, 0.079, 0.08, 0.081, 0.3, 0.6, 1.0] {
            let back = compress(expand(x));
            assert!(
                (back - x).abs() < 1e-5,
                "roundtrip failed at {}: got {}",
                x,
                back
            );
        }
    }

    #[test]
    fn test_midtone() {
        // L* 0.5 corresponds to linear ≈ 0.18419 (the lightness curve's
        // mid-gray anchor)
        assert!((expand(0.5) - 0.184_19).abs() < 1e-4);
    }
}
