//! RGB color in a configurable working space.
//!
//! An `Rgb` value holds companded (encoded) channels; the working space in
//! the conversion options supplies the primaries matrix and companding curve
//! needed to interpret it colorimetrically.

use crate::color::CieXyz;
use crate::converter::{ColorProfile, WhitePointSource};
use crate::options::ConversionOptions;

/// RGB color with companded channels (nominal 0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl ColorProfile for Rgb {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        let ws = &options.source_rgb_working_space;
        let linear = [
            ws.companding.expand(self.r) as f64,
            ws.companding.expand(self.g) as f64,
            ws.companding.expand(self.b) as f64,
        ];
        CieXyz::from_f64(ws.linear_to_xyz(linear))
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        let ws = &options.target_rgb_working_space;
        let linear = ws.xyz_to_linear(xyz.to_f64());
        // Simple clamping is the out-of-gamut policy; it also keeps the pure
        // power curves NaN-free on slightly negative values
        Self {
            r: ws.companding.compress((linear[0] as f32).clamp(0.0, 1.0)),
            g: ws.companding.compress((linear[1] as f32).clamp(0.0, 1.0)),
            b: ws.companding.compress((linear[2] as f32).clamp(0.0, 1.0)),
        }
    }

    fn white_point_source() -> WhitePointSource {
        WhitePointSource::RgbWorkingSpace
    }
}
