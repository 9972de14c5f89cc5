//! Palette registry: accent families, the neutral ramp and alpha tinting
//!
//! Every ramp runs from shade 50 (lightest) to shade 950 (darkest) with
//! strictly decreasing luminance. The ramps are `const` data; themes copy
//! them and never write back.

use crate::color::{AlphaStep, Color};
use crate::error::ThemeError;
use crate::tree::{TokenNode, TokenVisitor};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Accent color family catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorFamily {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
}

impl ColorFamily {
    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Teal => "teal",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Teal => "Teal",
        }
    }

    /// Full family list, in declaration order
    pub fn all() -> &'static [ColorFamily] {
        const FAMILIES: [ColorFamily; 6] = [
            ColorFamily::Blue,
            ColorFamily::Green,
            ColorFamily::Purple,
            ColorFamily::Orange,
            ColorFamily::Pink,
            ColorFamily::Teal,
        ];
        &FAMILIES
    }
}

impl Display for ColorFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorFamily {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|family| family.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownFamily(s.to_string()))
    }
}

impl TryFrom<String> for ColorFamily {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorFamily> for String {
    fn from(family: ColorFamily) -> Self {
        family.id().to_string()
    }
}

/// One lightness step of a ramp
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric step (50..=950)
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Token key of this step
    pub const fn key(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    pub fn from_value(value: u16) -> Option<Shade> {
        Self::ALL.into_iter().find(|shade| shade.value() == value)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// An 11-step lightness ramp
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorShades([Color; 11]);

impl ColorShades {
    /// Build a ramp from 11 `0xRRGGBB` values ordered 50..950
    pub const fn from_hex(hex: [u32; 11]) -> Self {
        let mut colors = [Color::BLACK; 11];
        let mut i = 0;
        while i < 11 {
            colors[i] = Color::from_hex(hex[i]);
            i += 1;
        }
        Self(colors)
    }

    pub const fn get(&self, shade: Shade) -> Color {
        self.0[shade.index()]
    }

    pub fn set(&mut self, shade: Shade, color: Color) {
        self.0[shade.index()] = color;
    }

    /// Look up a shade by its numeric step
    ///
    /// Unknown steps are a lookup miss: the result is `#000000` and a
    /// warning is logged.
    pub fn step(&self, value: u16) -> Color {
        match Shade::from_value(value) {
            Some(shade) => self.get(shade),
            None => {
                tracing::warn!(step = value, "unknown ramp step, falling back to #000000");
                Color::BLACK
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, Color)> + '_ {
        Shade::ALL.into_iter().map(move |shade| (shade, self.get(shade)))
    }
}

impl TokenNode for ColorShades {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        for (shade, color) in self.iter() {
            visitor.leaf(shade.key(), &color);
        }
    }
}

pub const BLUE: ColorShades = ColorShades::from_hex([
    0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8, 0x1E40AF,
    0x1E3A8A, 0x172554,
]);

pub const GREEN: ColorShades = ColorShades::from_hex([
    0xF0FDF4, 0xDCFCE7, 0xBBF7D0, 0x86EFAC, 0x4ADE80, 0x22C55E, 0x16A34A, 0x15803D, 0x166534,
    0x14532D, 0x052E16,
]);

pub const PURPLE: ColorShades = ColorShades::from_hex([
    0xFAF5FF, 0xF3E8FF, 0xE9D5FF, 0xD8B4FE, 0xC084FC, 0xA855F7, 0x9333EA, 0x7E22CE, 0x6B21A8,
    0x581C87, 0x3B0764,
]);

pub const ORANGE: ColorShades = ColorShades::from_hex([
    0xFFF7ED, 0xFFEDD5, 0xFED7AA, 0xFDBA74, 0xFB923C, 0xF97316, 0xEA580C, 0xC2410C, 0x9A3412,
    0x7C2D12, 0x431407,
]);

pub const PINK: ColorShades = ColorShades::from_hex([
    0xFDF2F8, 0xFCE7F3, 0xFBCFE8, 0xF9A8D4, 0xF472B6, 0xEC4899, 0xDB2777, 0xBE185D, 0x9D174D,
    0x831843, 0x500724,
]);

pub const TEAL: ColorShades = ColorShades::from_hex([
    0xF0FDFA, 0xCCFBF1, 0x99F6E4, 0x5EEAD4, 0x2DD4BF, 0x14B8A6, 0x0D9488, 0x0F766E, 0x115E59,
    0x134E4A, 0x042F2E,
]);

/// Neutral ramp backing surfaces, text and borders
pub const GRAY: ColorShades = ColorShades::from_hex([
    0xF9FAFB, 0xF3F4F6, 0xE5E7EB, 0xD1D5DB, 0x9CA3AF, 0x6B7280, 0x4B5563, 0x374151, 0x1F2937,
    0x111827, 0x030712,
]);

/// Ramp of an accent family
pub const fn get_ramp(family: ColorFamily) -> ColorShades {
    match family {
        ColorFamily::Blue => BLUE,
        ColorFamily::Green => GREEN,
        ColorFamily::Purple => PURPLE,
        ColorFamily::Orange => ORANGE,
        ColorFamily::Pink => PINK,
        ColorFamily::Teal => TEAL,
    }
}

pub const fn gray_ramp() -> ColorShades {
    GRAY
}

/// Tint `color` with one of the fixed alpha steps
pub const fn with_alpha(color: Color, step: AlphaStep) -> Color {
    color.with_alpha(step)
}

/// Every ramp of the registry, as carried by a theme
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawColors {
    pub blue: ColorShades,
    pub green: ColorShades,
    pub purple: ColorShades,
    pub orange: ColorShades,
    pub pink: ColorShades,
    pub teal: ColorShades,
    pub gray: ColorShades,
}

impl RawColors {
    pub fn ramp(&self, family: ColorFamily) -> &ColorShades {
        match family {
            ColorFamily::Blue => &self.blue,
            ColorFamily::Green => &self.green,
            ColorFamily::Purple => &self.purple,
            ColorFamily::Orange => &self.orange,
            ColorFamily::Pink => &self.pink,
            ColorFamily::Teal => &self.teal,
        }
    }

    pub fn ramp_mut(&mut self, family: ColorFamily) -> &mut ColorShades {
        match family {
            ColorFamily::Blue => &mut self.blue,
            ColorFamily::Green => &mut self.green,
            ColorFamily::Purple => &mut self.purple,
            ColorFamily::Orange => &mut self.orange,
            ColorFamily::Pink => &mut self.pink,
            ColorFamily::Teal => &mut self.teal,
        }
    }
}

impl Default for RawColors {
    fn default() -> Self {
        Self {
            blue: BLUE,
            green: GREEN,
            purple: PURPLE,
            orange: ORANGE,
            pink: PINK,
            teal: TEAL,
            gray: GRAY,
        }
    }
}

impl TokenNode for RawColors {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        for family in ColorFamily::all() {
            crate::tree::visit_group(visitor, family.id(), self.ramp(*family));
        }
        crate::tree::visit_group(visitor, "gray", &self.gray);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_get_darker_at_every_step() {
        let ramps = ColorFamily::all()
            .iter()
            .map(|family| (family.id(), get_ramp(*family)))
            .chain(std::iter::once(("gray", gray_ramp())));

        for (name, ramp) in ramps {
            let luminance: Vec<f64> = ramp.iter().map(|(_, c)| c.relative_luminance()).collect();
            for pair in luminance.windows(2) {
                assert!(pair[0] > pair[1], "{name} ramp is not monotonic");
            }
            assert!(
                ramp.get(Shade::S50).relative_luminance()
                    > ramp.get(Shade::S950).relative_luminance()
            );
        }
    }

    #[test]
    fn family_names_round_trip() {
        for family in ColorFamily::all() {
            assert_eq!(family.id().parse::<ColorFamily>().unwrap(), *family);
        }
        assert_eq!("GREEN".parse::<ColorFamily>().unwrap(), ColorFamily::Green);
        assert!(matches!(
            "magenta".parse::<ColorFamily>(),
            Err(ThemeError::UnknownFamily(name)) if name == "magenta"
        ));
    }

    #[test]
    fn numeric_step_lookup() {
        assert_eq!(BLUE.step(500), Color::from_hex(0x3B82F6));
        assert_eq!(BLUE.step(450), Color::BLACK);
    }

    #[test]
    fn raw_colors_walk_every_family_then_gray() {
        let mut collector = crate::tree::LeafCollector::default();
        RawColors::default().visit(&mut collector);
        assert_eq!(collector.leaves.len(), 7 * 11);
        assert_eq!(collector.leaves[0], ("blue.50".into(), "#eff6ff".into()));
        assert_eq!(
            collector.leaves.last().cloned(),
            Some(("gray.950".into(), "#030712".into()))
        );
    }

    #[test]
    fn alpha_helper_appends_suffix() {
        assert_eq!(
            with_alpha(GREEN.get(Shade::S500), AlphaStep::P10).to_string(),
            "#22c55e1a"
        );
    }
}
