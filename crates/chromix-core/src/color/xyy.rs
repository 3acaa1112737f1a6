//! CIE xyY chromaticity + luminance.

use crate::color::CieXyz;
use crate::converter::ColorProfile;
use crate::options::ConversionOptions;

/// CIE xyY color coordinates
///
/// `x`/`y` are chromaticity coordinates, `yl` is the luminance Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieXyy {
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
    /// Luminance Y
    pub yl: f32,
}

impl CieXyy {
    /// Create a new xyY color
    #[inline]
    pub const fn new(x: f32, y: f32, yl: f32) -> Self {
        Self { x, y, yl }
    }

    /// Create xyY from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            yl: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.yl]
    }

    /// Check if approximately equal to another xyY color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.yl - other.yl).abs() < epsilon
    }
}

impl ColorProfile for CieXyy {
    fn to_connecting_space(self, _options: &ConversionOptions) -> CieXyz {
        let y = self.y as f64;
        if y <= 0.0 {
            return CieXyz::new(0.0, 0.0, 0.0);
        }
        let x = self.x as f64;
        let yl = self.yl as f64;
        CieXyz::from_f64([x * yl / y, yl, (1.0 - x - y) * yl / y])
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        let v = xyz.to_f64();
        let sum = v[0] + v[1] + v[2];
        if sum <= 0.0 {
            // Black has no chromaticity of its own; report the target
            // white's so downstream math stays stable
            let w = options.target_white_point.xyz.to_f64();
            let wsum = w[0] + w[1] + w[2];
            return Self::new((w[0] / wsum) as f32, (w[1] / wsum) as f32, 0.0);
        }
        Self::new((v[0] / sum) as f32, (v[1] / sum) as f32, v[1] as f32)
    }
}
