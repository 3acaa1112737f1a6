//! Hunter Lab Color Space
//!
//! The 1948 Hunter scale; square-root based rather than cube-root like
//! CIELAB. The Ka/Kb chromaticity coefficients depend on the reference
//! white and anchor at 175/70 for illuminant C.

use crate::color::CieXyz;
use crate::converter::ColorProfile;
use crate::options::ConversionOptions;

/// Hunter Lab color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HunterLab {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl HunterLab {
    /// Create a new Hunter Lab color
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Create Hunter Lab from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }

    /// Check if approximately equal to another Hunter Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Ka coefficient for the given white point (175 under illuminant C)
#[inline]
fn compute_ka(white: [f64; 3]) -> f64 {
    100.0 * (175.0 / 198.04) * (white[0] + white[1])
}

/// Kb coefficient for the given white point (70 under illuminant C)
#[inline]
fn compute_kb(white: [f64; 3]) -> f64 {
    100.0 * (70.0 / 218.11) * (white[1] + white[2])
}

impl ColorProfile for HunterLab {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        let w = options.source_white_point.xyz.to_f64();
        let l = self.l as f64;
        let a = self.a as f64;
        let b = self.b as f64;

        let yr = (l / 100.0) * (l / 100.0);
        let sqrt_yr = l / 100.0;

        let ka = compute_ka(w);
        let kb = compute_kb(w);

        let xr = a / ka * sqrt_yr + yr;
        let zr = yr - b / kb * sqrt_yr;

        CieXyz::from_f64([xr * w[0], yr * w[1], zr * w[2]])
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        let w = options.target_white_point.xyz.to_f64();
        let v = xyz.to_f64();

        let xr = v[0] / w[0];
        let yr = v[1] / w[1];
        let zr = v[2] / w[2];

        let sqrt_yr = yr.max(0.0).sqrt();
        let l = 100.0 * sqrt_yr;

        // Zero luminance carries no chromaticity
        if sqrt_yr < 1e-9 {
            return Self::new(l as f32, 0.0, 0.0);
        }

        let ka = compute_ka(w);
        let kb = compute_kb(w);

        Self {
            l: l as f32,
            a: (ka * (xr - yr) / sqrt_yr) as f32,
            b: (kb * (yr - zr) / sqrt_yr) as f32,
        }
    }
}
