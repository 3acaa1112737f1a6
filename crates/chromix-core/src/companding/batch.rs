//! Batch companding over 4-channel samples.
//!
//! Operates in place on caller-owned `[f32; 4]` samples: the three color
//! channels are companded through the sRGB lookup tables, the fourth (alpha)
//! channel passes through unmodified.
//!
//! Two implementations exist. The fast path processes two samples per
//! 256-bit register using AVX2 gathers; the scalar fallback interpolates the
//! same tables one channel at a time. The path is selected once per process
//! based on detected CPU features, and both agree to within table
//! interpolation rounding.

use multiversion::multiversion;

use super::Companding;
use super::table::{SCALE, interpolate, srgb_tables};

/// Expand (decode) the color channels of each sample through the sRGB table.
pub(crate) fn expand_srgb(samples: &mut [[f32; 4]]) {
    compand(samples, srgb_tables().expand());
}

/// Compress (encode) the color channels of each sample through the sRGB table.
pub(crate) fn compress_srgb(samples: &mut [[f32; 4]]) {
    compand(samples, srgb_tables().compress());
}

fn compand(samples: &mut [[f32; 4]], table: &[f32]) {
    #[cfg(target_arch = "x86_64")]
    {
        if gather_available() {
            // Even prefix through the vector path, odd leftover through scalar
            let (pairs, tail) = samples.split_at_mut(samples.len() & !1);
            // SAFETY: AVX2 support was verified by gather_available
            unsafe { compand_pairs_avx2(pairs, table) };
            compand_scalar(tail, table);
            return;
        }
    }

    compand_scalar(samples, table);
}

/// Runtime AVX2 detection, resolved once per process.
#[cfg(target_arch = "x86_64")]
fn gather_available() -> bool {
    static AVX2: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
    *AVX2.get_or_init(|| is_x86_feature_detected!("avx2"))
}

/// Scalar reference path: interpolated table lookup per color channel.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn compand_scalar(samples: &mut [[f32; 4]], table: &[f32]) {
    for sample in samples.iter_mut() {
        sample[0] = interpolate(table, sample[0]);
        sample[1] = interpolate(table, sample[1]);
        sample[2] = interpolate(table, sample[2]);
    }
}

/// Vector path: two RGBA samples per 256-bit register.
///
/// Scale and clamp the whole register, truncate to indices, gather the two
/// bracketing table entries, interpolate, and blend the alpha lanes (3 and 7)
/// back from the original register.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn compand_pairs_avx2(samples: &mut [[f32; 4]], table: &[f32]) {
    use std::arch::x86_64::*;

    debug_assert!(samples.len() % 2 == 0);

    let flat: &mut [f32] = bytemuck::cast_slice_mut(samples);
    let table_ptr = table.as_ptr();

    // SAFETY: loads/stores are unaligned over caller-owned memory; gather
    // indices are clamped to [0, 65535] so index + 1 stays inside the
    // 65537-entry table.
    unsafe {
        let scale = _mm256_set1_ps(SCALE);
        let zero = _mm256_setzero_ps();
        let one = _mm256_set1_epi32(1);

        for chunk in flat.chunks_exact_mut(8) {
            let v = _mm256_loadu_ps(chunk.as_ptr());
            let scaled = _mm256_min_ps(_mm256_max_ps(_mm256_mul_ps(v, scale), zero), scale);
            // Truncation equals floor here since scaled is non-negative
            let index = _mm256_cvttps_epi32(scaled);
            let frac = _mm256_sub_ps(scaled, _mm256_cvtepi32_ps(index));

            let lower = _mm256_i32gather_ps::<4>(table_ptr, index);
            let upper = _mm256_i32gather_ps::<4>(table_ptr, _mm256_add_epi32(index, one));
            let lerped = _mm256_add_ps(lower, _mm256_mul_ps(frac, _mm256_sub_ps(upper, lower)));

            // Lanes 3 and 7 carry the two alpha values; keep them as loaded
            let blended = _mm256_blend_ps::<0b1000_1000>(lerped, v);
            _mm256_storeu_ps(chunk.as_mut_ptr(), blended);
        }
    }
}

/// Formula-based batch path for the non-tabulated curve families.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub(crate) fn expand_formula(companding: Companding, samples: &mut [[f32; 4]]) {
    for sample in samples.iter_mut() {
        sample[0] = companding.expand(sample[0]);
        sample[1] = companding.expand(sample[1]);
        sample[2] = companding.expand(sample[2]);
    }
}

/// Formula-based batch path for the non-tabulated curve families.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub(crate) fn compress_formula(companding: Companding, samples: &mut [[f32; 4]]) {
    for sample in samples.iter_mut() {
        sample[0] = companding.compress(sample[0]);
        sample[1] = companding.compress(sample[1]);
        sample[2] = companding.compress(sample[2]);
    }
}
