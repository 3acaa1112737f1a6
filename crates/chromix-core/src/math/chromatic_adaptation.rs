//! Chromatic Adaptation Transforms
//!
//! Chromatic adaptation transforms convert colors from one white point to
//! another. The most commonly used method is Bradford.
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::{CieXyz, WhitePoint};
use crate::math::Matrix3x3;

/// Chromatic adaptation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdaptationMethod {
    /// Bradford adaptation (recommended)
    #[default]
    Bradford,
    /// Von Kries adaptation
    VonKries,
    /// XYZ Scaling (simple but less accurate)
    XyzScaling,
    /// No adaptation (identity)
    None,
}

// ============================================================================
// Adaptation matrices (to/from cone response space)
// ============================================================================

/// Bradford matrix: XYZ → cone response
const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Bradford matrix: cone response → XYZ (inverse)
const BRADFORD_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Von Kries matrix: XYZ → cone response
const VON_KRIES_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4002400, 0.7076000, -0.0808100],
    [-0.2263000, 1.1653200, 0.0457000],
    [0.0000000, 0.0000000, 0.9182200],
]);

/// Von Kries matrix: cone response → XYZ
const VON_KRIES_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [1.8599364, -1.1293816, 0.2198974],
    [0.3611914, 0.6388125, -0.0000064],
    [0.0000000, 0.0000000, 1.0890636],
]);

/// Get the XYZ to cone-response matrix for a given method
pub(crate) fn cone_basis(method: AdaptationMethod) -> Matrix3x3 {
    match method {
        AdaptationMethod::Bradford => BRADFORD_XYZ_TO_LMS,
        AdaptationMethod::VonKries => VON_KRIES_XYZ_TO_LMS,
        AdaptationMethod::XyzScaling | AdaptationMethod::None => Matrix3x3::identity(),
    }
}

/// Get the cone-response to XYZ matrix for a given method
pub(crate) fn cone_basis_inverse(method: AdaptationMethod) -> Matrix3x3 {
    match method {
        AdaptationMethod::Bradford => BRADFORD_LMS_TO_XYZ,
        AdaptationMethod::VonKries => VON_KRIES_LMS_TO_XYZ,
        AdaptationMethod::XyzScaling | AdaptationMethod::None => Matrix3x3::identity(),
    }
}

/// Compute the chromatic adaptation matrix for converting from one white
/// point to another
///
/// The returned matrix M can be used as: XYZ_dest = M × XYZ_src
///
/// # Arguments
/// * `src_white` - Source white point
/// * `dst_white` - Destination white point
/// * `method` - Adaptation method to use
pub fn adaptation_matrix(
    src_white: &WhitePoint,
    dst_white: &WhitePoint,
    method: AdaptationMethod,
) -> Matrix3x3 {
    if method == AdaptationMethod::None || src_white.xyz == dst_white.xyz {
        return Matrix3x3::identity();
    }

    let src = src_white.xyz.to_f64();
    let dst = dst_white.xyz.to_f64();

    if method == AdaptationMethod::XyzScaling {
        return Matrix3x3::diagonal(
            scale_component(dst[0], src[0]),
            scale_component(dst[1], src[1]),
            scale_component(dst[2], src[2]),
        );
    }

    let m_a = cone_basis(method);
    let m_a_inv = cone_basis_inverse(method);

    // Project white points into cone response space
    let src_lms = m_a.multiply_vec(src);
    let dst_lms = m_a.multiply_vec(dst);

    let scale = Matrix3x3::diagonal(
        scale_component(dst_lms[0], src_lms[0]),
        scale_component(dst_lms[1], src_lms[1]),
        scale_component(dst_lms[2], src_lms[2]),
    );

    // M = M_A⁻¹ × Scale × M_A
    m_a_inv.multiply(&scale.multiply(&m_a))
}

#[inline]
fn scale_component(dst: f64, src: f64) -> f64 {
    if src.abs() > 1e-10 { dst / src } else { 1.0 }
}

/// Adapt an XYZ color from one white point to another
///
/// Equal white points are an exact identity: the input is returned without
/// any matrix round trip.
#[inline]
pub fn adapt(
    xyz: CieXyz,
    src_white: &WhitePoint,
    dst_white: &WhitePoint,
    method: AdaptationMethod,
) -> CieXyz {
    if method == AdaptationMethod::None || src_white.xyz == dst_white.xyz {
        return xyz;
    }
    let matrix = adaptation_matrix(src_white, dst_white, method);
    apply(&matrix, xyz)
}

/// Adapt a batch of XYZ colors in place.
///
/// The adaptation matrix is computed once for the whole slice, not per
/// element. Equal white points leave the slice untouched.
pub fn adapt_slice(
    values: &mut [CieXyz],
    src_white: &WhitePoint,
    dst_white: &WhitePoint,
    method: AdaptationMethod,
) {
    if method == AdaptationMethod::None || src_white.xyz == dst_white.xyz {
        return;
    }
    let matrix = adaptation_matrix(src_white, dst_white, method);
    for xyz in values.iter_mut() {
        *xyz = apply(&matrix, *xyz);
    }
}

/// Apply a precomputed adaptation matrix to a single XYZ value.
#[inline]
pub(crate) fn apply(matrix: &Matrix3x3, xyz: CieXyz) -> CieXyz {
    CieXyz::from_f64(matrix.multiply_vec(xyz.to_f64()))
}
