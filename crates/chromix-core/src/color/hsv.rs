//! HSV (hue, saturation, value) — a cylindrical view of encoded RGB.

use crate::color::{ACHROMATIC_EPSILON, CieXyz, Rgb};
use crate::converter::{ColorProfile, WhitePointSource};
use crate::options::ConversionOptions;

/// HSV color coordinates (hue in degrees, saturation/value in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue angle in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Create HSV from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            v: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }

    /// Check if approximately equal to another HSV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }

    /// Convert from encoded RGB; achromatic inputs get hue 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if delta < ACHROMATIC_EPSILON {
            return Self::new(0.0, 0.0, max);
        }

        let s = if max > 0.0 { delta / max } else { 0.0 };

        let mut h = if max == r {
            (g - b) / delta
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        } * 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Self::new(h, s, max)
    }

    /// Convert to encoded RGB.
    pub fn to_rgb(self) -> Rgb {
        if self.s < ACHROMATIC_EPSILON {
            return Rgb::new(self.v, self.v, self.v);
        }

        let h = (self.h / 60.0).rem_euclid(6.0);
        let sector = h.floor();
        let f = h - sector;

        let p = self.v * (1.0 - self.s);
        let q = self.v * (1.0 - self.s * f);
        let t = self.v * (1.0 - self.s * (1.0 - f));

        match sector as i32 {
            0 => Rgb::new(self.v, t, p),
            1 => Rgb::new(q, self.v, p),
            2 => Rgb::new(p, self.v, t),
            3 => Rgb::new(p, q, self.v),
            4 => Rgb::new(t, p, self.v),
            _ => Rgb::new(self.v, p, q),
        }
    }
}

impl ColorProfile for Hsv {
    fn to_connecting_space(self, options: &ConversionOptions) -> CieXyz {
        self.to_rgb().to_connecting_space(options)
    }

    fn from_connecting_space(xyz: CieXyz, options: &ConversionOptions) -> Self {
        Self::from_rgb(Rgb::from_connecting_space(xyz, options))
    }

    fn white_point_source() -> WhitePointSource {
        WhitePointSource::RgbWorkingSpace
    }
}
