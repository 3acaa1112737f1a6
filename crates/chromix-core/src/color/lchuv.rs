//! CIE LCh(uv) — the cylindrical form of CIELUV.

use crate::color::{ACHROMATIC_EPSILON, CieLuv, CieXyz};
use crate::converter::ColorProfile;
use crate::options::ConversionOptions;

/// CIE LCh(uv) color coordinates (lightness, chroma, hue in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieLchuv {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Chroma
    pub c: f32,
    /// Hue angle in degrees
    pub h: f32,
}

impl CieLchuv {
    /// Create a new LCh(uv) color
    #[inline]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create LCh(uv) from an array
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

    /// Check if approximately equal to another LCh(uv) color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }

    /// Rectangular form
    pub fn to_luv(self) -> CieLuv {
        let h = (self.h as f64).to_radians();
        CieLuv::new(
            self.l,
            (self.c as f64 * h.cos()) as f32,
            (self.c as f64 * h.sin()) as f32,
        )
    }

    /// Cylindrical form; achromatic colors get a defined hue of 0.
    pub fn from_luv(luv: CieLuv) -> Self {
        let c = (luv.u as f64).hypot(luv.v as f64) as f32;
        let h = if luv.u.abs() < ACHROMATIC_EPSILON && luv.v.abs() < ACHROMATIC_EPSILON {
            0.0
        } else {
            let degrees = (luv.v as f64).atan2(luv.u as f64).to_degrees();
            (if degrees < 0.0 { degrees + 360.0 } else { degrees }) as f32
        };
        Self::new(luv.l, c, h)
    }
}

impl ColorProfile for CieLchuv {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        self.to_luv().to_connecting_space(options)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        Self::from_luv(CieLuv::from_connecting_space(xyz, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achromatic_hue_is_zero() {
        let lchuv = CieLchuv::from_luv(CieLuv::new(50.0, 0.0, 0.0));
        assert_eq!(lchuv.h, 0.0);
        assert_eq!(lchuv.c, 0.0);
    }

    #[test]
    fn test_roundtrip() {
        let original = CieLchuv::new(60.0, 50.0, 200.0);
        let roundtrip = CieLchuv::from_luv(original.to_luv());
        assert!(original.approx_eq(&roundtrip, 1e-3));
    }
}
