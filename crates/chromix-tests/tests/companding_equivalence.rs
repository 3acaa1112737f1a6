//! Equivalence of the vectorized/table companding path and the scalar
//! formula path on random batches.

use chromix_core::companding::{Companding, srgb, srgb_tables};
use chromix_tests::samples::{random_samples, seeded_rng};

/// Batch sizes chosen to exercise the empty, single-sample (odd tail only),
/// pair, and multi-register cases.
const BATCH_SIZES: &[usize] = &[0, 1, 2, 3, 30, 31, 64, 1001];

#[test]
fn test_expand_matches_scalar_formula() {
    let mut rng = seeded_rng(0xC0FFEE);
    for &len in BATCH_SIZES {
        let mut batch = random_samples(&mut rng, len);
        let original = batch.clone();

        Companding::Srgb.expand_in_place(&mut batch);

        for (i, (out, inp)) in batch.iter().zip(original.iter()).enumerate() {
            for c in 0..3 {
                let expected = srgb::expand(inp[c]);
                assert!(
                    (out[c] - expected).abs() < 1e-6,
                    "len {} sample {} channel {}: {} vs {}",
                    len,
                    i,
                    c,
                    out[c],
                    expected
                );
            }
            assert_eq!(out[3], inp[3], "alpha modified at sample {}", i);
        }
    }
}

#[test]
fn test_compress_matches_scalar_formula() {
    let mut rng = seeded_rng(0xBEEF);
    for &len in BATCH_SIZES {
        let mut batch = random_samples(&mut rng, len);
        let original = batch.clone();

        Companding::Srgb.compress_in_place(&mut batch);

        for (i, (out, inp)) in batch.iter().zip(original.iter()).enumerate() {
            for c in 0..3 {
                let expected = srgb::compress(inp[c]);
                // 2e-6: the table cell straddling the linear/power seam
                // carries the standard constants' ~1e-6 mismatch on top of
                // interpolation rounding
                assert!(
                    (out[c] - expected).abs() < 2e-6,
                    "len {} sample {} channel {}: {} vs {}",
                    len,
                    i,
                    c,
                    out[c],
                    expected
                );
            }
            assert_eq!(out[3], inp[3], "alpha modified at sample {}", i);
        }
    }
}

#[test]
fn test_batch_expand_then_compress_roundtrip() {
    let mut rng = seeded_rng(7);
    let mut batch = random_samples(&mut rng, 256);
    let original = batch.clone();

    Companding::Srgb.expand_in_place(&mut batch);
    Companding::Srgb.compress_in_place(&mut batch);

    for (out, inp) in batch.iter().zip(original.iter()) {
        for c in 0..3 {
            assert!(
                (out[c] - inp[c]).abs() < 1e-4,
                "roundtrip drift: {} vs {}",
                out[c],
                inp[c]
            );
        }
    }
}

#[test]
fn test_interpolation_against_f64_reference() {
    // The table path must stay within interpolation rounding of the
    // double-precision formula across the whole domain
    let tables = srgb_tables();
    for i in 0..=10_000 {
        let x = i as f32 / 10_000.0;
        let interp = chromix_core::companding::interpolate(tables.expand(), x);
        let reference = {
            let x = x as f64;
            if x <= 0.04045 {
                x / 12.92
            } else {
                ((x + 0.055) / 1.055).powf(2.4)
            }
        };
        assert!(
            (interp as f64 - reference).abs() < 1e-6,
            "table diverges at {}: {} vs {}",
            x,
            interp,
            reference
        );
    }
}

#[test]
fn test_non_srgb_batch_uses_raw_formula() {
    // The formula families run per channel with no table clamp
    let mut batch = vec![[0.3f32, 0.6, 0.9, 0.5]; 4];
    Companding::Gamma(2.2).expand_in_place(&mut batch);
    for sample in &batch {
        assert_eq!(sample[0], 0.3f32.powf(2.2));
        assert_eq!(sample[1], 0.6f32.powf(2.2));
        assert_eq!(sample[2], 0.9f32.powf(2.2));
        assert_eq!(sample[3], 0.5);
    }
}
