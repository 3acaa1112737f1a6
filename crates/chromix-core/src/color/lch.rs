//! CIE LCh(ab) — the cylindrical form of CIELAB.

use crate::color::{ACHROMATIC_EPSILON, CieLab, CieXyz};
use crate::converter::ColorProfile;
use crate::options::ConversionOptions;

/// CIE LCh(ab) color coordinates
///
/// Lightness, chroma, and hue angle in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieLch {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Chroma
    pub c: f32,
    /// Hue angle in degrees
    pub h: f32,
}

impl CieLch {
    /// Create a new LCh color
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create LCh from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            l: arr[0],
            c: arr[1],
            h: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.l, self.c, self.h]
    }

    /// Check if approximately equal to another LCh color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }

    /// Rectangular form
    pub fn to_lab(self) -> CieLab {
        let h = (self.h as f64).to_radians();
        CieLab::new(
            self.l,
            (self.c as f64 * h.cos()) as f32,
            (self.c as f64 * h.sin()) as f32,
        )
    }

    /// Cylindrical form; achromatic colors get a defined hue of 0.
    pub fn from_lab(lab: CieLab) -> Self {
        let c = (lab.a as f64).hypot(lab.b as f64) as f32;
        let h = if lab.a.abs() < ACHROMATIC_EPSILON && lab.b.abs() < ACHROMATIC_EPSILON {
            0.0
        } else {
            let degrees = (lab.b as f64).atan2(lab.a as f64).to_degrees();
            (if degrees < 0.0 { degrees + 360.0 } else { degrees }) as f32
        };
        Self::new(lab.l, c, h)
    }
}

impl ColorProfile for CieLch {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        self.to_lab().to_connecting_space(options)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        Self::from_lab(CieLab::from_connecting_space(xyz, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fixture() {
        // Published reference pair
        let lch = CieLch::new(54.2917, 106.8391, 40.8526);
        let lab = lch.to_lab();
        assert!(
            lab.approx_eq(&CieLab::new(54.2917, 80.8125, 69.8851), 1e-3),
            "got {:?}",
            lab
        );
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let lch = CieLch::from_lab(CieLab::new(50.0, 0.0, 0.0));
        assert_eq!(lch.h, 0.0);
        assert_eq!(lch.c, 0.0);
        assert!(lch.h.is_finite());
    }

    #[test]
    fn test_roundtrip() {
        let original = CieLch::new(60.0, 40.0, 120.0);
        let roundtrip = CieLch::from_lab(original.to_lab());
        assert!(original.approx_eq(&roundtrip, 1e-3));
    }

    #[test]
    fn test_negative_hue_wraps() {
        // b < 0, a > 0 puts atan2 in the fourth quadrant
        let lch = CieLch::from_lab(CieLab::new(50.0, 10.0, -10.0));
        assert!((lch.h - 315.0).abs() < 1e-3);
    }
}
