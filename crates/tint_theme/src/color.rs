//! Hex colors and the alpha suffix table

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with an optional two-digit alpha suffix.
///
/// Formats as lowercase `#rrggbb`, or `#rrggbbaa` once an alpha step has
/// been applied.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    rgb: u32,
    alpha: Option<u8>,
}

impl Color {
    pub const WHITE: Color = Color::from_hex(0xFFFFFF);
    pub const BLACK: Color = Color::from_hex(0x000000);

    /// Create an opaque color from a `0xRRGGBB` literal
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            rgb: rgb & 0x00FF_FFFF,
            alpha: None,
        }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_hex(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Return the same color carrying the suffix of `step`
    pub const fn with_alpha(self, step: AlphaStep) -> Self {
        Self {
            rgb: self.rgb,
            alpha: Some(step.byte()),
        }
    }

    pub const fn red(self) -> u8 {
        (self.rgb >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.rgb >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.rgb as u8
    }

    pub const fn alpha(self) -> Option<u8> {
        self.alpha
    }

    /// WCAG relative luminance of the RGB channels (alpha ignored)
    pub fn relative_luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.red()) + 0.7152 * linear(self.green()) + 0.0722 * linear(self.blue())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.rgb)?;
        if let Some(alpha) = self.alpha {
            write!(f, "{alpha:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ThemeError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                let short = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let (r, g, b) = ((short >> 8) & 0xF, (short >> 4) & 0xF, short & 0xF);
                Ok(Self::from_hex((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            6 => Ok(Self::from_hex(
                u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
            )),
            8 => {
                let rgb = u32::from_str_radix(&digits[..6], 16).map_err(|_| invalid())?;
                let alpha = u8::from_str_radix(&digits[6..], 16).map_err(|_| invalid())?;
                Ok(Self {
                    rgb,
                    alpha: Some(alpha),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// The fixed opacity steps a color can be tinted with
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AlphaStep {
    P0,
    P5,
    P10,
    P20,
    P30,
    P40,
    P50,
    P60,
    P70,
    P80,
    P90,
    P95,
    P100,
}

impl AlphaStep {
    pub const ALL: [AlphaStep; 13] = [
        AlphaStep::P0,
        AlphaStep::P5,
        AlphaStep::P10,
        AlphaStep::P20,
        AlphaStep::P30,
        AlphaStep::P40,
        AlphaStep::P50,
        AlphaStep::P60,
        AlphaStep::P70,
        AlphaStep::P80,
        AlphaStep::P90,
        AlphaStep::P95,
        AlphaStep::P100,
    ];

    /// Opacity in percent
    pub const fn percent(self) -> u8 {
        match self {
            Self::P0 => 0,
            Self::P5 => 5,
            Self::P10 => 10,
            Self::P20 => 20,
            Self::P30 => 30,
            Self::P40 => 40,
            Self::P50 => 50,
            Self::P60 => 60,
            Self::P70 => 70,
            Self::P80 => 80,
            Self::P90 => 90,
            Self::P95 => 95,
            Self::P100 => 100,
        }
    }

    /// Alpha byte appended to a hex color
    pub const fn byte(self) -> u8 {
        match self {
            Self::P0 => 0x00,
            Self::P5 => 0x0D,
            Self::P10 => 0x1A,
            Self::P20 => 0x33,
            Self::P30 => 0x4D,
            Self::P40 => 0x66,
            Self::P50 => 0x80,
            Self::P60 => 0x99,
            Self::P70 => 0xB3,
            Self::P80 => 0xCC,
            Self::P90 => 0xE6,
            Self::P95 => 0xF2,
            Self::P100 => 0xFF,
        }
    }
}

impl TryFrom<u8> for AlphaStep {
    type Error = ThemeError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|step| step.percent() == percent)
            .ok_or(ThemeError::UnknownAlphaStep(percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lowercase_hex() {
        assert_eq!(Color::from_hex(0x3B82F6).to_string(), "#3b82f6");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn alpha_suffix_table() {
        let suffixes: Vec<String> = AlphaStep::ALL
            .iter()
            .map(|step| format!("{:02x}", step.byte()))
            .collect();
        assert_eq!(
            suffixes,
            [
                "00", "0d", "1a", "33", "4d", "66", "80", "99", "b3", "cc", "e6", "f2", "ff"
            ]
        );
        assert_eq!(
            Color::BLACK.with_alpha(AlphaStep::P50).to_string(),
            "#00000080"
        );
        assert_eq!(
            Color::WHITE.with_alpha(AlphaStep::P100).to_string(),
            "#ffffffff"
        );
    }

    #[test]
    fn alpha_step_from_percent() {
        assert_eq!(AlphaStep::try_from(95).unwrap(), AlphaStep::P95);
        assert!(matches!(
            AlphaStep::try_from(15),
            Err(ThemeError::UnknownAlphaStep(15))
        ));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#111111".parse::<Color>().unwrap(), Color::from_hex(0x111111));
        assert_eq!("#abc".parse::<Color>().unwrap(), Color::from_hex(0xAABBCC));
        let tinted: Color = "#3b82f666".parse().unwrap();
        assert_eq!(tinted, Color::from_hex(0x3B82F6).with_alpha(AlphaStep::P40));
        assert_eq!(tinted.to_string(), "#3b82f666");
    }

    #[test]
    fn rejects_malformed_colors() {
        for input in ["", "111111", "#12345", "#gggggg", "#+1234"] {
            assert!(
                matches!(input.parse::<Color>(), Err(ThemeError::InvalidColor(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn luminance_orders_black_and_white() {
        assert!(Color::WHITE.relative_luminance() > Color::BLACK.relative_luminance());
        assert_eq!(Color::BLACK.relative_luminance(), 0.0);
    }
}
