//! Profile conversion through the CIE XYZ hub
//!
//! Every profile type exposes two pure functions: a forward transform into
//! the XYZ connecting space and an inverse transform out of it. A conversion
//! between any two profiles is the composition of the source's forward
//! transform, an optional chromatic adaptation, and the target's inverse
//! transform. No profile pair bypasses the hub, which keeps the conversion
//! graph at O(n) transforms instead of O(n²) pairwise routines.

use crate::color::CieXyz;
use crate::error::{Error, Result};
use crate::math::chromatic_adaptation::{self, AdaptationMethod, adaptation_matrix};
use crate::math::Matrix3x3;
use crate::options::ConversionOptions;

/// Which configured white point a profile's values are anchored to for
/// chromatic adaptation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitePointSource {
    /// The options' source/target white point
    WhitePoint = 0,
    /// The white point of the options' source/target RGB working space
    RgbWorkingSpace = 1,
}

/// A color profile convertible through the CIE XYZ connecting space.
///
/// `to_connecting_space` interprets `self` using the source-side fields of
/// the options; `from_connecting_space` produces a value using the
/// target-side fields. Both are pure functions of their arguments.
pub trait ColorProfile: Copy {
    /// Forward transform into the XYZ connecting space.
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz;

    /// Inverse transform out of the XYZ connecting space.
    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self;

    /// White point this profile's values are defined against.
    ///
    /// RGB-family profiles are anchored to their working space's white;
    /// everything else uses the configured white point directly.
    fn white_point_source() -> WhitePointSource {
        WhitePointSource::WhitePoint
    }
}

/// Converts values between color profiles via the XYZ hub.
///
/// The converter precomputes every chromatic adaptation matrix the
/// configured options can require, so per-value and per-element conversions
/// never rebuild matrices. The converter holds no mutable state and can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct ColorProfileConverter {
    options: ConversionOptions,
    // Adaptation matrices indexed [source anchor][target anchor]; None where
    // the white points coincide (or adaptation is disabled), so the identity
    // case skips the matrix multiply entirely.
    adaptation: [[Option<Matrix3x3>; 2]; 2],
}

impl ColorProfileConverter {
    /// Create a converter for the given options.
    pub fn new(options: ConversionOptions) -> Self {
        let sources = [
            options.source_white_point,
            options.source_rgb_working_space.white_point,
        ];
        let targets = [
            options.target_white_point,
            options.target_rgb_working_space.white_point,
        ];

        let mut adaptation = [[None; 2]; 2];
        if options.adaptation != AdaptationMethod::None {
            for (i, src) in sources.iter().enumerate() {
                for (j, dst) in targets.iter().enumerate() {
                    if src.xyz != dst.xyz {
                        adaptation[i][j] =
                            Some(adaptation_matrix(src, dst, options.adaptation));
                    }
                }
            }
        }

        Self { options, adaptation }
    }

    /// The options this converter was built with.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert a single value between profiles.
    pub fn convert<TFrom, TTo>(&self, value: TFrom) -> TTo
    where
        TFrom: ColorProfile,
        TTo: ColorProfile,
    {
        let xyz = value.to_connecting_space(&self.options);
        let xyz = self.adapt(TFrom::white_point_source(), TTo::white_point_source(), xyz);
        TTo::from_connecting_space(xyz, &self.options)
    }

    /// Convert a batch of values between profiles.
    ///
    /// Fails fast with [`Error::BufferSize`] when the source and destination
    /// lengths differ; nothing is written in that case.
    pub fn convert_slice<TFrom, TTo>(
        &self,
        source: &[TFrom],
        destination: &mut [TTo],
    ) -> Result<()>
    where
        TFrom: ColorProfile,
        TTo: ColorProfile,
    {
        if source.len() != destination.len() {
            return Err(Error::BufferSize {
                expected: source.len(),
                actual: destination.len(),
            });
        }

        for (src, dst) in source.iter().zip(destination.iter_mut()) {
            *dst = self.convert(*src);
        }
        Ok(())
    }

    /// Convert a batch of values in parallel.
    ///
    /// Elements are independent, so the result is identical to
    /// [`ColorProfileConverter::convert_slice`].
    #[cfg(feature = "parallel")]
    pub fn convert_slice_par<TFrom, TTo>(
        &self,
        source: &[TFrom],
        destination: &mut [TTo],
    ) -> Result<()>
    where
        TFrom: ColorProfile + Send + Sync,
        TTo: ColorProfile + Send + Sync,
    {
        use rayon::prelude::*;

        if source.len() != destination.len() {
            return Err(Error::BufferSize {
                expected: source.len(),
                actual: destination.len(),
            });
        }

        source
            .par_iter()
            .zip(destination.par_iter_mut())
            .for_each(|(src, dst)| *dst = self.convert(*src));
        Ok(())
    }

    #[inline]
    fn adapt(&self, from: WhitePointSource, to: WhitePointSource, xyz: CieXyz) -> CieXyz {
        match &self.adaptation[from as usize][to as usize] {
            Some(matrix) => chromatic_adaptation::apply(matrix, xyz),
            None => xyz,
        }
    }
}

impl Default for ColorProfileConverter {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}
