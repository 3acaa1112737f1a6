//! RGB working space descriptors
//!
//! A working space fixes the chromaticity primaries, reference white, and
//! companding curve needed to interpret an [`Rgb`](crate::color::Rgb) value
//! colorimetrically. The named spaces carry precomputed RGB↔XYZ matrices;
//! custom spaces derive theirs from the primaries at construction.

use crate::color::white_point::{self, WhitePoint};
use crate::companding::Companding;
use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// An xy chromaticity coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Create a new chromaticity coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The red/green/blue chromaticity primaries of a working space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbPrimaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
}

impl RgbPrimaries {
    /// Create a primaries triple
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        Self { red, green, blue }
    }
}

/// An RGB working space definition
///
/// Immutable; construct once (or use a named constructor) and share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbWorkingSpace {
    /// Name of the working space
    pub name: &'static str,
    /// Reference white the space's values are defined against
    pub white_point: WhitePoint,
    /// Chromaticity primaries
    pub primaries: RgbPrimaries,
    /// Companding curve used to encode/decode channel values
    pub companding: Companding,
    to_xyz: Matrix3x3,
    from_xyz: Matrix3x3,
}

impl RgbWorkingSpace {
    /// Build a custom working space, deriving the RGB↔XYZ matrices from the
    /// primaries and reference white.
    ///
    /// Fails if the primaries are degenerate (zero-y chromaticity or
    /// colinear primaries yielding a singular matrix).
    pub fn from_primaries(
        name: &'static str,
        white_point: WhitePoint,
        primaries: RgbPrimaries,
        companding: Companding,
    ) -> Result<Self> {
        let to_xyz = primaries_matrix(&primaries, &white_point)?;
        let from_xyz = to_xyz
            .inverse()
            .ok_or_else(|| Error::InvalidWorkingSpace(format!("{name}: singular primaries")))?;

        Ok(Self {
            name,
            white_point,
            primaries,
            companding,
            to_xyz,
            from_xyz,
        })
    }

    /// Linear RGB → XYZ matrix
    #[inline]
    pub fn to_xyz_matrix(&self) -> &Matrix3x3 {
        &self.to_xyz
    }

    /// XYZ → linear RGB matrix
    #[inline]
    pub fn from_xyz_matrix(&self) -> &Matrix3x3 {
        &self.from_xyz
    }

    /// Transform a linear RGB triple into XYZ
    #[inline]
    pub(crate) fn linear_to_xyz(&self, linear: [f64; 3]) -> [f64; 3] {
        self.to_xyz.multiply_vec(linear)
    }

    /// Transform an XYZ triple into linear RGB
    #[inline]
    pub(crate) fn xyz_to_linear(&self, xyz: [f64; 3]) -> [f64; 3] {
        self.from_xyz.multiply_vec(xyz)
    }

    /// sRGB (IEC 61966-2-1), D65
    pub fn srgb() -> Self {
        Self {
            name: "sRGB",
            white_point: white_point::D65,
            primaries: RgbPrimaries::new(
                Chromaticity::new(0.6400, 0.3300),
                Chromaticity::new(0.3000, 0.6000),
                Chromaticity::new(0.1500, 0.0600),
            ),
            companding: Companding::Srgb,
            to_xyz: SRGB_TO_XYZ,
            from_xyz: XYZ_TO_SRGB,
        }
    }

    /// Rec. 709 (ITU-R BT.709), D65
    ///
    /// Shares the sRGB primaries; only the companding differs.
    pub fn rec709() -> Self {
        Self {
            name: "Rec. 709",
            companding: Companding::Rec709,
            ..Self::srgb()
        }
    }

    /// Rec. 2020 (ITU-R BT.2020), D65
    pub fn rec2020() -> Self {
        Self {
            name: "Rec. 2020",
            white_point: white_point::D65,
            primaries: RgbPrimaries::new(
                Chromaticity::new(0.7080, 0.2920),
                Chromaticity::new(0.1700, 0.7970),
                Chromaticity::new(0.1310, 0.0460),
            ),
            companding: Companding::Rec2020,
            to_xyz: BT2020_TO_XYZ,
            from_xyz: XYZ_TO_BT2020,
        }
    }

    /// Adobe RGB (1998), D65
    pub fn adobe_rgb_1998() -> Self {
        Self {
            name: "Adobe RGB (1998)",
            white_point: white_point::D65,
            primaries: RgbPrimaries::new(
                Chromaticity::new(0.6400, 0.3300),
                Chromaticity::new(0.2100, 0.7100),
                Chromaticity::new(0.1500, 0.0600),
            ),
            companding: Companding::Gamma(2.199_218_8),
            to_xyz: ADOBE_RGB_TO_XYZ,
            from_xyz: XYZ_TO_ADOBE_RGB,
        }
    }

    /// ProPhoto RGB (ROMM), D50
    pub fn pro_photo_rgb() -> Self {
        Self {
            name: "ProPhoto RGB",
            white_point: white_point::D50,
            primaries: RgbPrimaries::new(
                Chromaticity::new(0.7347, 0.2653),
                Chromaticity::new(0.1596, 0.8404),
                Chromaticity::new(0.0366, 0.0001),
            ),
            companding: Companding::Gamma(1.8),
            to_xyz: PROPHOTO_TO_XYZ,
            from_xyz: XYZ_TO_PROPHOTO,
        }
    }

    /// ECI RGB v2, D50, L* companding
    pub fn eci_rgb_v2() -> Self {
        Self {
            name: "ECI RGB v2",
            white_point: white_point::D50,
            primaries: RgbPrimaries::new(
                Chromaticity::new(0.6700, 0.3300),
                Chromaticity::new(0.2100, 0.7100),
                Chromaticity::new(0.1400, 0.0800),
            ),
            companding: Companding::LStar,
            to_xyz: ECI_RGB_TO_XYZ,
            from_xyz: XYZ_TO_ECI_RGB,
        }
    }
}

/// Derive the linear RGB → XYZ matrix from chromaticity primaries and a
/// reference white (Lindbloom's method: scale the primaries' tristimulus
/// columns so white maps exactly onto the reference white).
fn primaries_matrix(primaries: &RgbPrimaries, white_point: &WhitePoint) -> Result<Matrix3x3> {
    let column = |c: &Chromaticity| -> Result<[f64; 3]> {
        if c.y.abs() < 1e-12 {
            return Err(Error::InvalidWorkingSpace(format!(
                "chromaticity ({}, {}) has zero y",
                c.x, c.y
            )));
        }
        Ok([c.x / c.y, 1.0, (1.0 - c.x - c.y) / c.y])
    };

    let r = column(&primaries.red)?;
    let g = column(&primaries.green)?;
    let b = column(&primaries.blue)?;

    let unscaled = Matrix3x3::new([
        [r[0], g[0], b[0]],
        [r[1], g[1], b[1]],
        [r[2], g[2], b[2]],
    ]);

    let inverse = unscaled
        .inverse()
        .ok_or_else(|| Error::InvalidWorkingSpace("colinear primaries".to_string()))?;

    let s = inverse.multiply_vec(white_point.xyz.to_f64());

    Ok(Matrix3x3::new([
        [s[0] * r[0], s[1] * g[0], s[2] * b[0]],
        [s[0] * r[1], s[1] * g[1], s[2] * b[1]],
        [s[0] * r[2], s[1] * g[2], s[2] * b[2]],
    ]))
}

// ============================================================================
// Precomputed working space matrices (Lindbloom values)
// ============================================================================

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to sRGB matrix (D65)
const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// BT.2020 to XYZ matrix (D65)
const BT2020_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.6369580, 0.1446169, 0.1688810],
    [0.2627002, 0.6779981, 0.0593017],
    [0.0000000, 0.0280727, 1.0609851],
]);

/// XYZ to BT.2020 matrix (D65)
const XYZ_TO_BT2020: Matrix3x3 = Matrix3x3::new([
    [1.7166512, -0.3556708, -0.2533663],
    [-0.6666844, 1.6164812, 0.0157685],
    [0.0176399, -0.0427706, 0.9421031],
]);

/// Adobe RGB (1998) to XYZ matrix (D65)
const ADOBE_RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.5767309, 0.1855540, 0.1881852],
    [0.2973769, 0.6273491, 0.0752741],
    [0.0270343, 0.0706872, 0.9911085],
]);

/// XYZ to Adobe RGB (1998) matrix (D65)
const XYZ_TO_ADOBE_RGB: Matrix3x3 = Matrix3x3::new([
    [2.0413690, -0.5649464, -0.3446944],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0134474, -0.1183897, 1.0154096],
]);

/// ProPhoto RGB to XYZ matrix (D50)
const PROPHOTO_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.7976749, 0.1351917, 0.0313534],
    [0.2880402, 0.7118741, 0.0000857],
    [0.0000000, 0.0000000, 0.8252100],
]);

/// XYZ to ProPhoto RGB matrix (D50)
const XYZ_TO_PROPHOTO: Matrix3x3 = Matrix3x3::new([
    [1.3459433, -0.2556075, -0.0511118],
    [-0.5445989, 1.5081673, 0.0205351],
    [0.0000000, 0.0000000, 1.2118128],
]);

/// ECI RGB v2 to XYZ matrix (D50)
const ECI_RGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.6502043, 0.1780774, 0.1359384],
    [0.3202499, 0.6020711, 0.0776791],
    [0.0000000, 0.0678390, 0.7573710],
]);

/// XYZ to ECI RGB v2 matrix (D50)
const XYZ_TO_ECI_RGB: Matrix3x3 = Matrix3x3::new([
    [1.7827618, -0.4969847, -0.2690101],
    [-0.9593623, 1.9477962, -0.0275807],
    [0.0859317, -0.1744674, 1.3230613],
]);
