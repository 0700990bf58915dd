//! Brand color parsing and the black-or-white contrast rule.
//!
//! Every contrast decision on the page goes through [`Rgb::foreground`]:
//! luma uses the BT.601 weights (`0.299R + 0.587G + 0.114B`) and anything
//! at or above 128 gets black text, everything else gets white.
//!
//! Luma is compared in thousandths (`299R + 587G + 114B >= 128_000`) so the
//! boundary is exact rather than subject to float rounding.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::PitchError;

/// `LUMA_THRESHOLD * 1000`, matching the integer luma below.
const LUMA_THRESHOLD_MILLI: u32 = 128_000;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Slate 900 (`#0F172A`), the base of every body-text tone.
    pub const SLATE_900: Rgb = Rgb::new(15, 23, 42);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses `#RRGGBB` (either case). A missing `#`, three-digit shorthand,
    /// an alpha suffix or any non-hex character is rejected.
    pub fn parse_hex(value: &str) -> Option<Rgb> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Luma scaled by 1000: `299R + 587G + 114B`, in `0..=255_000`.
    pub fn luma_milli(self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    /// Luma in `0.0..=255.0`.
    pub fn luma(self) -> f64 {
        f64::from(self.luma_milli()) / 1000.0
    }

    /// The legible text color on top of this background.
    pub fn foreground(self) -> Foreground {
        if self.luma_milli() >= LUMA_THRESHOLD_MILLI {
            Foreground::Black
        } else {
            Foreground::White
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The only two foreground colors the page ever derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    pub fn as_hex(self) -> &'static str {
        match self {
            Foreground::Black => "#000000",
            Foreground::White => "#FFFFFF",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Foreground::Black => Rgb::BLACK,
            Foreground::White => Rgb::WHITE,
        }
    }
}

impl From<Foreground> for &'static str {
    fn from(fg: Foreground) -> Self {
        fg.as_hex()
    }
}

/// Parses one authored brand color, naming the field on failure.
pub fn parse_brand_color(field: &'static str, value: &str) -> Result<Rgb, PitchError> {
    Rgb::parse_hex(value).ok_or_else(|| PitchError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Picks `#000000` or `#FFFFFF` for text on `background_hex`.
pub fn pick_foreground_color(background_hex: &str) -> Result<&'static str, PitchError> {
    parse_brand_color("background", background_hex).map(|bg| bg.foreground().as_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_background_gets_white_text() {
        assert_eq!(pick_foreground_color("#000000").unwrap(), "#FFFFFF");
    }

    #[test]
    fn test_white_background_gets_black_text() {
        assert_eq!(pick_foreground_color("#FFFFFF").unwrap(), "#000000");
    }

    #[test]
    fn test_luma_exactly_128_gets_black_text() {
        // 299*128 + 587*128 + 114*128 = 128_000
        let gray = Rgb::new(128, 128, 128);
        assert_eq!(gray.luma_milli(), 128_000);
        assert_eq!(gray.foreground(), Foreground::Black);
        assert_eq!(pick_foreground_color("#808080").unwrap(), "#000000");
    }

    #[test]
    fn test_luma_just_below_128_gets_white_text() {
        let gray = Rgb::new(127, 127, 127);
        assert_eq!(gray.luma_milli(), 127_000);
        assert_eq!(gray.foreground(), Foreground::White);
    }

    #[test]
    fn test_mixed_channel_boundary() {
        // 299*100 + 587*161 + 114*0 = 29_900 + 94_507 = 124_407 → white
        assert_eq!(Rgb::new(100, 161, 0).foreground(), Foreground::White);
        // 299*112 + 587*161 + 114*11 = 33_488 + 94_507 + 1_254 = 129_249 → black
        assert_eq!(Rgb::new(112, 161, 11).foreground(), Foreground::Black);
    }

    #[test]
    fn test_foreground_is_total_and_binary() {
        let mut black = 0u32;
        let mut white = 0u32;
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    match Rgb::new(r, g, b).foreground() {
                        Foreground::Black => black += 1,
                        Foreground::White => white += 1,
                    }
                }
            }
        }
        assert_eq!(black + white, 16_777_216);
        assert!(black > 0 && white > 0);
    }

    #[test]
    fn test_integer_luma_matches_float_formula() {
        for rgb in [
            Rgb::new(237, 0, 128),
            Rgb::new(241, 97, 34),
            Rgb::new(249, 158, 28),
            Rgb::new(15, 23, 42),
        ] {
            let float = (f64::from(rgb.r) * 299.0 + f64::from(rgb.g) * 587.0
                + f64::from(rgb.b) * 114.0)
                / 1000.0;
            assert!((rgb.luma() - float).abs() < 1e-9);
            assert_eq!(rgb.foreground() == Foreground::Black, float >= 128.0);
        }
    }

    #[test]
    fn test_parse_hex_accepts_both_cases() {
        assert_eq!(Rgb::parse_hex("#ed0080"), Some(Rgb::new(237, 0, 128)));
        assert_eq!(Rgb::parse_hex("#ED0080"), Some(Rgb::new(237, 0, 128)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for bad in [
            "ED0080", "#ED008", "#ED00800", "#FFF", "#GG0080", "#ED0080FF", "", "#", "#+D0080",
            "#éé00",
        ] {
            assert!(Rgb::parse_hex(bad).is_none(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_brand_color_names_field() {
        let err = parse_brand_color("theme.primary", "hotpink").unwrap_err();
        match err {
            PitchError::InvalidColor { field, value } => {
                assert_eq!(field, "theme.primary");
                assert_eq!(value, "hotpink");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(249, 158, 28).to_string(), "#F99E1C");
        assert_eq!(Rgb::SLATE_900.to_string(), "#0F172A");
    }

    #[test]
    fn test_foreground_serializes_as_hex() {
        assert_eq!(
            serde_json::to_string(&Foreground::White).unwrap(),
            "\"#FFFFFF\""
        );
    }
}
