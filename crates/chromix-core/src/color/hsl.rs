//! HSL (hue, saturation, lightness) — a cylindrical view of encoded RGB.

use crate::color::{ACHROMATIC_EPSILON, CieXyz, Rgb};
use crate::converter::{ColorProfile, WhitePointSource};
use crate::options::ConversionOptions;

/// HSL color coordinates
///
/// Hue in degrees [0, 360), saturation and lightness in [0, 1]. Derived from
/// the companded (encoded) RGB channels of the configured working space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Lightness
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Create HSL from an array
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self {
            h: arr[0],
            s: arr[1],
            l: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.h, self.s, self.l]
    }

    /// Check if approximately equal to another HSL color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }

    /// Convert from encoded RGB; achromatic inputs get hue and saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta < ACHROMATIC_EPSILON {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

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

        Self::new(h, s, l)
    }

    /// Convert to encoded RGB.
    pub fn to_rgb(self) -> Rgb {
        if self.s < ACHROMATIC_EPSILON {
            return Rgb::new(self.l, self.l, self.l);
        }

        let q = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let p = 2.0 * self.l - q;
        let h = self.h / 360.0;

        Rgb::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl ColorProfile for Hsl {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let red = Hsl::from_rgb(Rgb::new(1.0, 0.0, 0.0));
        assert!((red.h - 0.0).abs() < 1e-4);
        assert!((red.s - 1.0).abs() < 1e-4);
        assert!((red.l - 0.5).abs() < 1e-4);

        let green = Hsl::from_rgb(Rgb::new(0.0, 1.0, 0.0));
        assert!((green.h - 120.0).abs() < 1e-3);

        let blue = Hsl::from_rgb(Rgb::new(0.0, 0.0, 1.0));
        assert!((blue.h - 240.0).abs() < 1e-3);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let gray = Hsl::from_rgb(Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        for rgb in [
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.2, 0.4, 0.6),
            Rgb::new(0.9, 0.9, 0.1),
            Rgb::new(0.0, 0.0, 0.0),
            Rgb::new(1.0, 1.0, 1.0),
        ] {
            let back = Hsl::from_rgb(rgb).to_rgb();
            assert!(
                rgb.approx_eq(&back, 1e-4),
                "roundtrip failed: {:?} vs {:?}",
                rgb,
                back
            );
        }
    }
}
