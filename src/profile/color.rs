//! Wine color primitives: 8-bit RGB, hex parsing and HSL conversion.
//!
//! Colors serialize as `"#RRGGBB"` so a serialized profile reads back through
//! the same hex parser the normalizer uses for raw input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0,360), saturation and lightness in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Fallback color when nothing usable is known about the wine.
pub const PALE_STRAW: Rgb = Rgb::new(0xF6, 0xF2, 0xAF);

/// Named wine colors accepted through the `color_name` attribute.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("pale straw", PALE_STRAW),
    ("straw", Rgb::new(0xF5, 0xEB, 0x7C)),
    ("lemon", Rgb::new(0xF4, 0xE0, 0x4D)),
    ("gold", Rgb::new(0xE6, 0xC7, 0x5B)),
    ("amber", Rgb::new(0xD4, 0x8A, 0x3A)),
    ("rose", Rgb::new(0xF4, 0xA6, 0xB0)),
    ("rosé", Rgb::new(0xF4, 0xA6, 0xB0)),
    ("salmon", Rgb::new(0xF2, 0xA2, 0x9B)),
    ("onion skin", Rgb::new(0xD4, 0x8C, 0x78)),
    ("ruby", Rgb::new(0x8B, 0x1A, 0x1A)),
    ("garnet", Rgb::new(0x7B, 0x2D, 0x26)),
    ("brick", Rgb::new(0x8B, 0x3A, 0x2B)),
    ("purple", Rgb::new(0x5B, 0x2C, 0x6F)),
    ("tawny", Rgb::new(0xA0, 0x52, 0x2D)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `RRGGBB` or `AARRGGBB`, optionally prefixed with `#` or `0x`.
    ///
    /// The alpha byte of the 8-digit form is discarded.
    pub fn from_hex(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = match digits.len() {
            6 => digits,
            8 => &digits[2..],
            _ => return None,
        };
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&rgb[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Looks up a named wine color ("ruby", "pale straw", ...), case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(label, _)| *label == wanted)
            .map(|(_, color)| *color)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as floats in [0,1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta <= f64::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = (sector * 60.0).rem_euclid(360.0);
        Hsl { h, s, l }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        PALE_STRAW
    }
}

impl Hsl {
    #[cfg(test)]
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = self.to_unit();
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(quantize(r), quantize(g), quantize(b))
    }

    /// Converts to float RGB in [0,1] without 8-bit quantization.
    pub fn to_unit(self) -> [f32; 3] {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        [(r + m) as f32, (g + m) as f32, (b + m) as f32]
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_and_alpha_prefix() {
        let expected = Rgb::new(0x7A, 0x1F, 0x2B);
        assert_eq!(Rgb::from_hex("#7A1F2B"), Some(expected));
        assert_eq!(Rgb::from_hex("7a1f2b"), Some(expected));
        assert_eq!(Rgb::from_hex("0x7A1F2B"), Some(expected));
        assert_eq!(Rgb::from_hex("#FF7A1F2B"), Some(expected));
    }

    #[test]
    fn malformed_hex_falls_back_to_pale_straw() {
        for input in ["", "#", "#FFF", "#12345", "#GG0000", "#1234567", "not a color", "#ÄÄÄÄÄÄ"] {
            assert_eq!(Rgb::from_hex(input), None, "{input:?} should be rejected");
            assert_eq!(Rgb::from_hex(input).unwrap_or_default(), PALE_STRAW);
        }
    }

    #[test]
    fn hsl_matches_known_wine_colors() {
        let straw = PALE_STRAW.to_hsl();
        assert!(straw.l > 0.8 && (40.0..=120.0).contains(&straw.h));

        let rose = Rgb::from_name("rosé").unwrap().to_hsl();
        assert!(rose.l > 0.6 && rose.h >= 330.0);

        let red = Rgb::new(0x7A, 0x1F, 0x2B).to_hsl();
        assert!(red.l < 0.4);
    }

    #[test]
    fn hsl_conversion_is_stable_for_primaries() {
        for color in [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255), Rgb::new(128, 128, 128)] {
            assert_eq!(color.to_hsl().to_rgb(), color);
        }
    }

    #[test]
    fn serializes_as_uppercase_hex() {
        let json = serde_json::to_string(&Rgb::new(0x8B, 0x1A, 0x1A)).unwrap();
        assert_eq!(json, "\"#8B1A1A\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(0x8B, 0x1A, 0x1A));
    }
}
