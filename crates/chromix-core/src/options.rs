//! Conversion options
//!
//! A [`ConversionOptions`] value is the engine's sole configuration surface.
//! It is built once per conversion session, never mutated afterwards, and
//! reused across many calls.

use crate::color::white_point::{self, WhitePoint};
use crate::color::working_space::RgbWorkingSpace;
use crate::math::AdaptationMethod;

/// Luma coefficient sets for Y extraction in the YCbCr-family profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YCoefficients {
    /// ITU-R BT.601 (SD video)
    #[default]
    Bt601,
    /// ITU-R BT.709 (HD video)
    Bt709,
    /// ITU-R BT.2020 (UHD video)
    Bt2020,
}

impl YCoefficients {
    /// The (Kr, Kg, Kb) weights applied to encoded R'G'B'
    #[inline]
    pub const fn values(self) -> (f32, f32, f32) {
        match self {
            Self::Bt601 => (0.299, 0.587, 0.114),
            Self::Bt709 => (0.2126, 0.7152, 0.0722),
            Self::Bt2020 => (0.2627, 0.6780, 0.0593),
        }
    }
}

/// Configuration aggregate for profile conversions
///
/// The `source_*` fields describe how input values are interpreted on the
/// way into the XYZ connecting space; the `target_*` fields describe how
/// output values are produced from it. Chromatic adaptation is inserted
/// between the two halves whenever the relevant white points differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// White point the source profile's values are defined against
    pub source_white_point: WhitePoint,
    /// White point the target profile's values are defined against
    pub target_white_point: WhitePoint,
    /// Working space used to interpret source RGB-family values
    pub source_rgb_working_space: RgbWorkingSpace,
    /// Working space used to produce target RGB-family values
    pub target_rgb_working_space: RgbWorkingSpace,
    /// Chromatic adaptation method
    pub adaptation: AdaptationMethod,
    /// Luma coefficients for the YCbCr-family profiles
    pub y_coefficients: YCoefficients,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            source_white_point: white_point::D65,
            target_white_point: white_point::D65,
            source_rgb_working_space: RgbWorkingSpace::srgb(),
            target_rgb_working_space: RgbWorkingSpace::srgb(),
            adaptation: AdaptationMethod::Bradford,
            y_coefficients: YCoefficients::Bt601,
        }
    }
}
