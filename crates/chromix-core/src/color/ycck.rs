//! YccK — YCbCr chroma over a shared key channel (Adobe-style YCCK).
//!
//! The YCbCr triple encodes the complement of the chromatic ink (the R'G'B'
//! of the color with K removed); K rides along unmodified through the chroma
//! math and is reapplied as a (1 − K) scale.

use crate::color::{ACHROMATIC_EPSILON, CieXyz, Rgb, YCbCr};
use crate::converter::{ColorProfile, WhitePointSource};
use crate::options::ConversionOptions;

/// YccK color coordinates (4 components)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YccK {
    /// Luma of the chromatic part
    pub y: f32,
    /// Blue-difference chroma
    pub cb: f32,
    /// Red-difference chroma
    pub cr: f32,
    /// Key (black)
    pub k: f32,
}

impl YccK {
    /// Create a new YccK color
    #[inline]
    pub const fn new(y: f32, cb: f32, cr: f32, k: f32) -> Self {
        Self { y, cb, cr, k }
    }

    /// Create YccK from an array
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self {
            y: arr[0],
            cb: arr[1],
            cr: arr[2],
            k: arr[3],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.y, self.cb, self.cr, self.k]
    }

    /// Check if approximately equal to another YccK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.cb - other.cb).abs() < epsilon
            && (self.cr - other.cr).abs() < epsilon
            && (self.k - other.k).abs() < epsilon
    }
}

impl ColorProfile for YccK {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        // Chromatic part first, then reapply the key
        let chroma = YCbCr::new(self.y, self.cb, self.cr).to_rgb(options);
        let scale = 1.0 - self.k;
        Rgb::new(chroma.r * scale, chroma.g * scale, chroma.b * scale)
            .to_connecting_space(options)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        let rgb = Rgb::from_connecting_space(xyz, options);
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let k = 1.0 - max;

        if max < ACHROMATIC_EPSILON {
            // Full black: no chromatic part left to encode
            return Self::new(0.0, 0.5, 0.5, 1.0);
        }

        let chroma = Rgb::new(rgb.r / max, rgb.g / max, rgb.b / max);
        let ycbcr = YCbCr::from_rgb(chroma, options);
        Self::new(ycbcr.y, ycbcr.cb, ycbcr.cr, k)
    }

    fn white_point_source() -> WhitePointSource {
        WhitePointSource::RgbWorkingSpace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_hub() {
        let options = ConversionOptions::default();
        for rgb in [
            Rgb::new(0.8, 0.3, 0.1),
            Rgb::new(0.5, 0.5, 0.5),
            Rgb::new(0.0, 0.7, 0.2),
        ] {
            let xyz = rgb.to_connecting_space(&options);
            let ycck = YccK::from_connecting_space(xyz, &options);
            let back = ycck.to_connecting_space(&options);
            assert!(
                xyz.approx_eq(&back, 1e-4),
                "hub roundtrip failed: {:?} vs {:?}",
                xyz,
                back
            );
        }
    }

    #[test]
    fn test_black_is_stable() {
        let options = ConversionOptions::default();
        let ycck = YccK::from_connecting_space(CieXyz::new(0.0, 0.0, 0.0), &options);
        assert_eq!(ycck.k, 1.0);
        assert_eq!(ycck.y, 0.0);
        assert_eq!(ycck.cb, 0.5);
        assert_eq!(ycck.cr, 0.5);

        let xyz = ycck.to_connecting_space(&options);
        assert!(xyz.approx_eq(&CieXyz::new(0.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_white_has_no_key() {
        let options = ConversionOptions::default();
        let white = Rgb::new(1.0, 1.0, 1.0).to_connecting_space(&options);
        let ycck = YccK::from_connecting_space(white, &options);
        assert!(ycck.k.abs() < 1e-5);
        assert!((ycck.y - 1.0).abs() < 1e-4);
    }
}
