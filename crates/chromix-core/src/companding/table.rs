//! Process-wide sRGB lookup tables.
//!
//! Two 65537-entry f32 tables (expand and compress directions) sampled at
//! 16-bit granularity. Entries are computed with f64 math and rounded to f32
//! for storage. The tables are built at most once per process and are
//! immutable afterwards, so concurrent readers need no synchronization.

use std::sync::OnceLock;

use super::srgb;

/// Full-scale value the table is sampled against.
pub(crate) const SCALE: f32 = 65535.0;

/// Table length: full scale plus a guard entry so the interpolation upper
/// index `i + 1` is always in bounds for `i <= 65535`.
const LENGTH: usize = 65535 + 2;

/// The pair of sRGB lookup tables.
pub struct SrgbTables {
    expand: Box<[f32]>,
    compress: Box<[f32]>,
}

impl SrgbTables {
    fn build() -> Self {
        let mut expand = vec![0.0f32; LENGTH].into_boxed_slice();
        let mut compress = vec![0.0f32; LENGTH].into_boxed_slice();

        for i in 0..LENGTH {
            let x = i as f64 / SCALE as f64;
            expand[i] = srgb::expand_f64(x) as f32;
            compress[i] = srgb::compress_f64(x) as f32;
        }

        Self { expand, compress }
    }

    /// The encoded→linear table.
    #[inline]
    pub fn expand(&self) -> &[f32] {
        &self.expand
    }

    /// The linear→encoded table.
    #[inline]
    pub fn compress(&self) -> &[f32] {
        &self.compress
    }
}

/// Access the process-wide sRGB tables, building them on first use.
///
/// Construction is guarded by a `OnceLock`; concurrent first callers race
/// benignly and observe a single fully-built table pair.
pub fn srgb_tables() -> &'static SrgbTables {
    static TABLES: OnceLock<SrgbTables> = OnceLock::new();
    TABLES.get_or_init(SrgbTables::build)
}

/// Interpolated table lookup.
///
/// `value` is scaled to [0, 65535], clamped, split into an integer index and
/// fractional part, and linearly interpolated between adjacent entries.
/// Values outside [0, 1] are clamped to the table domain.
#[inline]
pub fn interpolate(table: &[f32], value: f32) -> f32 {
    let scaled = (value * SCALE).clamp(0.0, SCALE);
    let index = scaled as usize;
    let frac = scaled - index as f32;

    let lower = table[index];
    lower + frac * (table[index + 1] - lower)
}
