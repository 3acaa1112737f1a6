//! Seeded random sample generation for batch tests.

use chromix_core::color::Rgb;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deterministic RNG for reproducible test data.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random 4-channel samples with every channel in [0, 1].
pub fn random_samples(rng: &mut ChaCha8Rng, len: usize) -> Vec<[f32; 4]> {
    (0..len)
        .map(|_| {
            [
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            ]
        })
        .collect()
}

/// Random RGB values with channels in [0, 1].
pub fn random_rgb(rng: &mut ChaCha8Rng, len: usize) -> Vec<Rgb> {
    (0..len)
        .map(|_| {
            Rgb::new(
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = random_samples(&mut seeded_rng(42), 16);
        let b = random_samples(&mut seeded_rng(42), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_samples_in_range() {
        let samples = random_samples(&mut seeded_rng(7), 100);
        for sample in samples {
            for channel in sample {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
