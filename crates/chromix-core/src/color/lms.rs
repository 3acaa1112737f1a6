//! LMS cone-response color.
//!
//! Projects XYZ through the cone basis selected by the conversion options'
//! adaptation method. With XYZ scaling (identity basis) the values coincide
//! with XYZ.

use crate::color::CieXyz;
use crate::converter::ColorProfile;
use crate::math::chromatic_adaptation::{cone_basis, cone_basis_inverse};
use crate::options::ConversionOptions;

/// LMS cone-response coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    /// Long-wavelength cone response
    pub l: f32,
    /// Medium-wavelength cone response
    pub m: f32,
    /// Short-wavelength cone response
    pub s: f32,
}

impl Lms {
    /// Create a new LMS color
    #[inline]
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Self { l, m, s }
    }

    /// Create LMS from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            l: arr[0],
            m: arr[1],
            s: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.l, self.m, self.s]
    }

    /// Check if approximately equal to another LMS color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.m - other.m).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
    }
}

impl ColorProfile for Lms {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        let basis_inverse = cone_basis_inverse(options.adaptation);
        CieXyz::from_f64(
            basis_inverse.multiply_vec([self.l as f64, self.m as f64, self.s as f64]),
        )
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        let basis = cone_basis(options.adaptation);
        let v = basis.multiply_vec(xyz.to_f64());
        Self::new(v[0] as f32, v[1] as f32, v[2] as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::AdaptationMethod;

    #[test]
    fn test_roundtrip_bradford() {
        let options = ConversionOptions::default();
        let xyz = CieXyz::new(0.4, 0.5, 0.6);
        let lms = Lms::from_connecting_space(xyz, &options);
        let back = lms.to_connecting_space(&options);
        assert!(xyz.approx_eq(&back, 1e-5));
    }

    #[test]
    fn test_xyz_scaling_basis_is_identity() {
        let options = ConversionOptions {
            adaptation: AdaptationMethod::XyzScaling,
            ..Default::default()
        };
        let xyz = CieXyz::new(0.4, 0.5, 0.6);
        let lms = Lms::from_connecting_space(xyz, &options);
        assert_eq!(lms.to_array(), xyz.to_array());
    }
}
