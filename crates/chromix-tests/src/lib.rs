//! # chromix-tests
//!
//! Accuracy and property tests for the chromix conversion engine.
//!
//! This crate provides:
//! - Published colorimetry fixtures
//! - Hub-consistency checks across every supported profile pair
//! - Scalar/vectorized companding equivalence on random batches
//! - Achromatic stability (NaN-free) checks
//!
//! Test data generation is seeded so failures reproduce deterministically.

pub mod samples;
