//! CMYK — naive ink model over the configured RGB working space.

use crate::color::{ACHROMATIC_EPSILON, CieXyz, Rgb};
use crate::converter::{ColorProfile, WhitePointSource};
use crate::options::ConversionOptions;

/// CMYK color coordinates (all components in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
    /// Key (black)
    pub k: f32,
}

impl Cmyk {
    /// Create a new CMYK color
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }

    /// Create CMYK from an array
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self {
            c: arr[0],
            m: arr[1],
            y: arr[2],
            k: arr[3],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.c - other.c).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.k - other.k).abs() < epsilon
    }

    /// Naive ink → encoded RGB.
    pub(crate) fn to_rgb(self) -> Rgb {
        Rgb::new(
            (1.0 - self.c) * (1.0 - self.k),
            (1.0 - self.m) * (1.0 - self.k),
            (1.0 - self.y) * (1.0 - self.k),
        )
    }

    /// Encoded RGB → naive ink. Full black carries no chromatic ink.
    pub(crate) fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let k = 1.0 - max;

        if max < ACHROMATIC_EPSILON {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        Self {
            c: (1.0 - rgb.r - k) / max,
            m: (1.0 - rgb.g - k) / max,
            y: (1.0 - rgb.b - k) / max,
            k,
        }
    }
}

impl ColorProfile for Cmyk {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        self.to_rgb().to_connecting_space(options)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        Self::from_rgb(Rgb::from_connecting_space(xyz, options))
    }

    fn white_point_source() -> WhitePointSource {
        WhitePointSource::RgbWorkingSpace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        let black = Cmyk::from_rgb(Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(black, Cmyk::new(0.0, 0.0, 0.0, 1.0));

        let white = Cmyk::from_rgb(Rgb::new(1.0, 1.0, 1.0));
        assert!(white.approx_eq(&Cmyk::new(0.0, 0.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_gray_has_no_chromatic_ink() {
        let gray = Cmyk::from_rgb(Rgb::new(0.5, 0.5, 0.5));
        assert!(gray.c.abs() < 1e-5);
        assert!(gray.m.abs() < 1e-5);
        assert!(gray.y.abs() < 1e-5);
        assert!((gray.k - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_roundtrip() {
        for rgb in [
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.3, 0.6, 0.9),
            Rgb::new(0.5, 0.5, 0.5),
            Rgb::new(0.0, 0.0, 0.0),
        ] {
            let back = Cmyk::from_rgb(rgb).to_rgb();
            assert!(
                rgb.approx_eq(&back, 1e-5),
                "roundtrip failed: {:?} vs {:?}",
                rgb,
                back
            );
        }
    }
}
