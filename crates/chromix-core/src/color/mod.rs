//! Color profile value types
//!
//! Each profile is a small immutable f32 tuple with component accessors and
//! array constructors. Components are not range-clamped at construction;
//! clamping is a conversion-time policy applied where the conversion math
//! requires it.

pub mod cmyk;
pub mod hsl;
pub mod hsv;
pub mod hunter_lab;
pub mod lab;
pub mod lch;
pub mod lchuv;
pub mod lms;
pub mod luminance;
pub mod luv;
pub mod rgb;
pub mod white_point;
pub mod working_space;
pub mod xyy;
pub mod xyz;
pub mod ycbcr;
pub mod ycck;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hunter_lab::HunterLab;
pub use lab::CieLab;
pub use lch::CieLch;
pub use lchuv::CieLchuv;
pub use lms::Lms;
pub use luminance::Luminance;
pub use luv::CieLuv;
pub use rgb::Rgb;
pub use white_point::WhitePoint;
pub use working_space::{Chromaticity, RgbPrimaries, RgbWorkingSpace};
pub use xyy::CieXyy;
pub use xyz::CieXyz;
pub use ycbcr::YCbCr;
pub use ycck::YccK;

/// Threshold below which chroma-like quantities are treated as zero when
/// computing hues and ratios, so achromatic inputs never produce NaN.
pub(crate) const ACHROMATIC_EPSILON: f32 = 1e-6;
