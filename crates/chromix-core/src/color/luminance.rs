//! Relative luminance (CIE Y).

use crate::color::CieXyz;
use crate::converter::ColorProfile;
use crate::options::ConversionOptions;

/// A single-component relative luminance value
///
/// Through the hub this is the Y tristimulus component; the reconstruction
/// direction produces an achromatic color at the source white's
/// chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Luminance {
    /// Relative luminance (0 to 1 nominal)
    pub y: f32,
}

impl Luminance {
    /// Create a new luminance value
    #[inline]
    pub const fn new(y: f32) -> Self {
        Self { y }
    }

    /// Check if approximately equal to another luminance value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.y - other.y).abs() < epsilon
    }
}

impl From<f32> for Luminance {
    fn from(y: f32) -> Self {
        Self::new(y)
    }
}

impl From<Luminance> for f32 {
    fn from(luminance: Luminance) -> Self {
        luminance.y
    }
}

impl ColorProfile for Luminance {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        let w = options.source_white_point.xyz.to_f64();
        let scale = self.y as f64 / w[1];
        CieXyz::from_f64([w[0] * scale, self.y as f64, w[2] * scale])
    }

    fn from_connecting_space(xyz: CieXyz, _options: &ConversionOptions) -> Self {
        Self::new(xyz.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::white_point::D65;

    #[test]
    fn test_extraction() {
        let options = ConversionOptions::default();
        let y = Luminance::from_connecting_space(CieXyz::new(0.3, 0.6, 0.1), &options);
        assert_eq!(y.y, 0.6);
    }

    #[test]
    fn test_full_luminance_is_white() {
        let options = ConversionOptions::default();
        let xyz = Luminance::new(1.0).to_connecting_space(&options);
        assert!(xyz.approx_eq(&D65.xyz, 1e-5));
    }

    #[test]
    fn test_roundtrip() {
        let options = ConversionOptions::default();
        for y in [0.0, 0.18, 0.5, 1.0] {
            let back = Luminance::from_connecting_space(
                Luminance::new(y).to_connecting_space(&options),
                &options,
            );
            assert!((back.y - y).abs() < 1e-6);
        }
    }
}
