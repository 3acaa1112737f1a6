//! YCbCr luma/chroma color, full range.
//!
//! Computed from companded R'G'B' with the luma coefficient set selected in
//! the conversion options. Y is in [0, 1]; Cb/Cr are centered on 0.5.

use crate::color::{CieXyz, Rgb};
use crate::converter::{ColorProfile, WhitePointSource};
use crate::options::ConversionOptions;

/// YCbCr color coordinates (full range, normalized)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YCbCr {
    /// Luma
    pub y: f32,
    /// Blue-difference chroma
    pub cb: f32,
    /// Red-difference chroma
    pub cr: f32,
}

impl YCbCr {
    /// Create a new YCbCr color
    #[inline]
    pub const fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }

    /// Create YCbCr from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            y: arr[0],
            cb: arr[1],
            cr: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.y, self.cb, self.cr]
    }

    /// Check if approximately equal to another YCbCr color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.y - other.y).abs() < epsilon
            && (self.cb - other.cb).abs() < epsilon
            && (self.cr - other.cr).abs() < epsilon
    }

    /// Decode to companded R'G'B' with the given luma coefficients.
    pub(crate) fn to_rgb(self, options: &ConversionOptions) -> Rgb {
        let (kr, kg, kb) = options.y_coefficients.values();
        let r = self.y + 2.0 * (1.0 - kr) * (self.cr - 0.5);
        let b = self.y + 2.0 * (1.0 - kb) * (self.cb - 0.5);
        let g = (self.y - kr * r - kb * b) / kg;
        Rgb::new(r, g, b).clamp()
    }

    /// Encode from companded R'G'B' with the given luma coefficients.
    pub(crate) fn from_rgb(rgb: Rgb, options: &ConversionOptions) -> Self {
        let (kr, kg, kb) = options.y_coefficients.values();
        let y = kr * rgb.r + kg * rgb.g + kb * rgb.b;
        Self {
            y,
            cb: 0.5 + (rgb.b - y) / (2.0 * (1.0 - kb)),
            cr: 0.5 + (rgb.r - y) / (2.0 * (1.0 - kr)),
        }
    }
}

impl ColorProfile for YCbCr {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        self.to_rgb(options).to_connecting_space(options)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        Self::from_rgb(Rgb::from_connecting_space(xyz, options), options)
    }

    fn white_point_source() -> WhitePointSource {
        WhitePointSource::RgbWorkingSpace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::YCoefficients;

    #[test]
    fn test_white_and_black() {
        let options = ConversionOptions::default();

        let white = YCbCr::from_rgb(Rgb::new(1.0, 1.0, 1.0), &options);
        assert!((white.y - 1.0).abs() < 1e-5);
        assert!((white.cb - 0.5).abs() < 1e-5);
        assert!((white.cr - 0.5).abs() < 1e-5);

        let black = YCbCr::from_rgb(Rgb::new(0.0, 0.0, 0.0), &options);
        assert!(black.y.abs() < 1e-5);
        assert!((black.cb - 0.5).abs() < 1e-5);
        assert!((black.cr - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_bt601_red_luma() {
        let options = ConversionOptions::default();
        let red = YCbCr::from_rgb(Rgb::new(1.0, 0.0, 0.0), &options);
        assert!((red.y - 0.299).abs() < 1e-5);
        // Full-range red peaks Cr
        assert!((red.cr - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_roundtrip_all_coefficient_sets() {
        for coeffs in [
            YCoefficients::Bt601,
            YCoefficients::Bt709,
            YCoefficients::Bt2020,
        ] {
            let options = ConversionOptions {
                y_coefficients: coeffs,
                ..Default::default()
            };
            for rgb in [
                Rgb::new(0.8, 0.2, 0.4),
                Rgb::new(0.0, 1.0, 0.0),
                Rgb::new(0.5, 0.5, 0.5),
            ] {
                let back = YCbCr::from_rgb(rgb, &options).to_rgb(&options);
                assert!(
                    rgb.approx_eq(&back, 1e-4),
                    "{:?} roundtrip failed: {:?} vs {:?}",
                    coeffs,
                    rgb,
                    back
                );
            }
        }
    }
}
