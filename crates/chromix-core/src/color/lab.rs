//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)

use crate::color::CieXyz;
use crate::converter::ColorProfile;
use crate::options::ConversionOptions;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieLab {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Green-red axis (typically -128 to 127)
    pub a: f32,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f32,
}

impl CieLab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
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

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    pub(crate) fn to_xyz_with_white(self, white: CieXyz) -> CieXyz {
        let fy = (self.l as f64 + 16.0) / 116.0;
        let fx = self.a as f64 / 500.0 + fy;
        let fz = fy - self.b as f64 / 200.0;

        let xr = lab_f_inv(fx);
        let yr = lab_f_inv(fy);
        let zr = lab_f_inv(fz);

        let w = white.to_f64();
        CieXyz::from_f64([xr * w[0], yr * w[1], zr * w[2]])
    }

    pub(crate) fn from_xyz_with_white(xyz: CieXyz, white: CieXyz) -> Self {
        let v = xyz.to_f64();
        let w = white.to_f64();

        let fx = lab_f(v[0] / w[0]);
        let fy = lab_f(v[1] / w[1]);
        let fz = lab_f(v[2] / w[2]);

        Self {
            l: (116.0 * fy - 16.0) as f32,
            a: (500.0 * (fx - fy)) as f32,
            b: (200.0 * (fy - fz)) as f32,
        }
    }
}

/// Lab forward function: f(t) for XYZ → Lab conversion
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Lab inverse function: f⁻¹(t) for Lab → XYZ conversion
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl From<[f32; 3]> for CieLab {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<CieLab> for [f32; 3] {
    fn from(lab: CieLab) -> Self {
        lab.to_array()
    }
}

impl ColorProfile for CieLab {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        self.to_xyz_with_white(options.source_white_point.xyz)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        Self::from_xyz_with_white(xyz, options.target_white_point.xyz)
    }
}
