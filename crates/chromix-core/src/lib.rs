//! # chromix - color profile conversion engine
//!
//! Converts color samples between colorimetric representations and applies
//! transfer-function ("companding") curves between linear light and encoded
//! values.
//!
//! ## Design
//!
//! - **Hub-and-spoke**: every conversion routes through CIE XYZ, so adding a
//!   profile is one forward/inverse transform pair, not a row of pairwise
//!   routines.
//! - **Chromatic adaptation**: when source and target white points differ, a
//!   Bradford/von Kries/XYZ-scaling transform is inserted between the two
//!   hub legs; the matrices are precomputed per conversion session.
//! - **Fast companding**: sRGB batches run through process-wide lookup
//!   tables, with an AVX2 gather path where the CPU supports it and a scalar
//!   table fallback everywhere else.
//!
//! ## Quick Start
//!
//! ```
//! use chromix_core::{ColorProfileConverter, ConversionOptions};
//! use chromix_core::color::{CieLab, Rgb};
//!
//! let converter = ColorProfileConverter::new(ConversionOptions::default());
//!
//! // sRGB red as CIELAB under the default D65 options
//! let lab: CieLab = converter.convert(Rgb::new(1.0, 0.0, 0.0));
//! assert!((lab.l - 53.24).abs() < 0.1);
//! ```
//!
//! ## Batch companding
//!
//! ```
//! use chromix_core::companding::Companding;
//!
//! // Three color channels plus a pass-through alpha channel per sample
//! let mut samples = vec![[0.5f32, 0.5, 0.5, 1.0]; 64];
//! Companding::Srgb.expand_in_place(&mut samples);
//!
//! assert!((samples[0][0] - 0.214).abs() < 1e-3);
//! assert_eq!(samples[0][3], 1.0);
//! ```

pub mod color;
pub mod companding;
pub mod converter;
pub mod error;
pub mod math;
pub mod options;

pub use color::{
    CieLab, CieLch, CieLchuv, CieLuv, CieXyy, CieXyz, Cmyk, Hsl, Hsv, HunterLab, Lms, Luminance,
    Rgb, RgbWorkingSpace, WhitePoint, YCbCr, YccK,
};
pub use companding::Companding;
pub use converter::{ColorProfile, ColorProfileConverter, WhitePointSource};
pub use error::{Error, Result};
pub use math::AdaptationMethod;
pub use options::{ConversionOptions, YCoefficients};

/// Version of chromix
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
