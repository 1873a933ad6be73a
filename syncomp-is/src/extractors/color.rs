// Color Feature Extractor
//
// `#RRGGBB` → RGB → HSV. Hue covers a full turn in [0, 1).

use super::FeatureExtractor;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use syncomp_common::{Error, InputKind, Result};
use tracing::debug;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, digits are case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_input(format!(
                "color must be six hex digits like #FF6B6B, got '{}'",
                hex
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| Error::invalid_input(format!("bad hex channel in '{}': {}", hex, e)))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Render as uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue/saturation/value, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue as a fraction of a full turn, in [0, 1)
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Standard RGB → HSV conversion
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;

        // Achromatic (includes black)
        if max == min {
            return Self { h: 0.0, s: 0.0, v };
        }

        let delta = max - min;
        let s = delta / max;
        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        let mut h = (sector / 6.0).rem_euclid(1.0);
        // rem_euclid can round a tiny negative up to exactly 1.0
        if h >= 1.0 {
            h = 0.0;
        }

        Self { h, s, v }
    }
}

/// Features of one color input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorFeatures {
    pub rgb: Rgb,
    pub hsv: Hsv,
}

impl ColorFeatures {
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

pub struct ColorExtractor;

impl FeatureExtractor for ColorExtractor {
    type Input = Rgb;
    type Features = ColorFeatures;

    fn source_id(&self) -> &'static str {
        "Color"
    }

    fn kind(&self) -> InputKind {
        InputKind::Color
    }

    fn extract(&self, rgb: &Rgb) -> Result<ColorFeatures> {
        let hsv = Hsv::from_rgb(*rgb);
        debug!(
            "Color {} → HSV H={:.2}, S={:.2}, V={:.2}",
            rgb.to_hex(),
            hsv.h,
            hsv.s,
            hsv.v
        );
        Ok(ColorFeatures { rgb: *rgb, hsv })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#FF6B6B").unwrap(), Rgb::new(255, 107, 107));
        assert_eq!(Rgb::from_hex("4ecdc4").unwrap(), Rgb::new(78, 205, 196));
        assert_eq!(" #000000 ".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["", "#", "#FFF", "#FF6B6B0", "#GG0000", "FF 6B6B", "#+F0000"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_to_hex_uppercase() {
        assert_eq!(Rgb::new(255, 107, 107).to_hex(), "#FF6B6B");
        assert_eq!(Rgb::from_hex("#0a0b0c").unwrap().to_hex(), "#0A0B0C");
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Hsv::from_rgb(Rgb::new(255, 0, 0));
        assert!(approx(red.h, 0.0) && approx(red.s, 1.0) && approx(red.v, 1.0));

        let green = Hsv::from_rgb(Rgb::new(0, 255, 0));
        assert!(approx(green.h, 1.0 / 3.0));

        let blue = Hsv::from_rgb(Rgb::new(0, 0, 255));
        assert!(approx(blue.h, 2.0 / 3.0));
    }

    #[test]
    fn test_hsv_achromatic() {
        let black = Hsv::from_rgb(Rgb::new(0, 0, 0));
        assert_eq!(black, Hsv { h: 0.0, s: 0.0, v: 0.0 });

        let grey = Hsv::from_rgb(Rgb::new(128, 128, 128));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!(approx(grey.v, 128.0 / 255.0));
    }

    #[test]
    fn test_hsv_magenta_side_wraps_positive() {
        // Red is max and blue > green: raw sector is negative
        let hsv = Hsv::from_rgb(Rgb::new(255, 0, 128));
        assert!(hsv.h > 0.9 && hsv.h < 1.0, "hue {}", hsv.h);
    }

    #[test]
    fn test_hue_always_in_unit_interval() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let hsv = Hsv::from_rgb(Rgb::new(r as u8, g as u8, b as u8));
                    assert!((0.0..1.0).contains(&hsv.h));
                    assert!((0.0..=1.0).contains(&hsv.s));
                    assert!((0.0..=1.0).contains(&hsv.v));
                }
            }
        }
    }

    #[test]
    fn test_extract_coral() {
        let features = ColorExtractor.extract(&Rgb::new(255, 107, 107)).unwrap();
        assert_eq!(features.hex(), "#FF6B6B");
        assert!(approx(features.hsv.h, 0.0));
        assert!((features.hsv.s - 0.58).abs() < 0.005);
        assert!(approx(features.hsv.v, 1.0));
    }
}
