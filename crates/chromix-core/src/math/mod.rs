//! Mathematical operations for color conversion
//!
//! This module provides foundational math operations used throughout chromix:
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - Chromatic adaptation (Bradford, von Kries, XYZ scaling)

pub mod chromatic_adaptation;
pub mod matrix;

pub use chromatic_adaptation::{AdaptationMethod, adapt, adapt_slice, adaptation_matrix};
pub use matrix::Matrix3x3;

/// CIE epsilon constant (216/24389), the L* curve breakpoint in linear terms.
pub(crate) const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE kappa constant (24389/27), the slope of the linear L* segment.
pub(crate) const CIE_KAPPA: f64 = 24389.0 / 27.0;
