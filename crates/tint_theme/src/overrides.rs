//! Typed partial overrides and the recursive merge that applies them
//!
//! The set of overridable keys is closed: every patch struct rejects
//! unknown keys when deserialized, so a misspelled override fails loudly
//! instead of being dropped.

use crate::color::Color;
use crate::palette::{ColorShades, RawColors, Shade};
use crate::tokens::SemanticPatch;
use serde::Deserialize;

/// A token structure that accepts partial overrides
pub trait Merge {
    type Patch;

    /// Replace every leaf the patch supplies; keep the rest
    fn merge(&mut self, patch: &Self::Patch);

    /// Replace every leaf with `color`
    fn fill(&mut self, color: Color);
}

/// Override for one group of tokens
///
/// A single color where a group is expected replaces the whole group:
/// last write wins, every leaf of the group takes that color.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GroupPatch<P> {
    Replace(Color),
    Merge(P),
}

impl<P> GroupPatch<P> {
    pub fn apply_to<M: Merge<Patch = P>>(&self, target: &mut M, group: &str) {
        match self {
            Self::Replace(color) => {
                tracing::debug!(group, %color, "scalar override replaces token group");
                target.fill(*color);
            }
            Self::Merge(patch) => target.merge(patch),
        }
    }
}

/// Partial override of one ramp, shade by shade
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadesPatch {
    #[serde(default, rename = "50")]
    pub s50: Option<Color>,
    #[serde(default, rename = "100")]
    pub s100: Option<Color>,
    #[serde(default, rename = "200")]
    pub s200: Option<Color>,
    #[serde(default, rename = "300")]
    pub s300: Option<Color>,
    #[serde(default, rename = "400")]
    pub s400: Option<Color>,
    #[serde(default, rename = "500")]
    pub s500: Option<Color>,
    #[serde(default, rename = "600")]
    pub s600: Option<Color>,
    #[serde(default, rename = "700")]
    pub s700: Option<Color>,
    #[serde(default, rename = "800")]
    pub s800: Option<Color>,
    #[serde(default, rename = "900")]
    pub s900: Option<Color>,
    #[serde(default, rename = "950")]
    pub s950: Option<Color>,
}

impl ShadesPatch {
    pub fn get(&self, shade: Shade) -> Option<Color> {
        match shade {
            Shade::S50 => self.s50,
            Shade::S100 => self.s100,
            Shade::S200 => self.s200,
            Shade::S300 => self.s300,
            Shade::S400 => self.s400,
            Shade::S500 => self.s500,
            Shade::S600 => self.s600,
            Shade::S700 => self.s700,
            Shade::S800 => self.s800,
            Shade::S900 => self.s900,
            Shade::S950 => self.s950,
        }
    }
}

impl Merge for ColorShades {
    type Patch = ShadesPatch;

    fn merge(&mut self, patch: &ShadesPatch) {
        for shade in Shade::ALL {
            if let Some(color) = patch.get(shade) {
                self.set(shade, color);
            }
        }
    }

    fn fill(&mut self, color: Color) {
        for shade in Shade::ALL {
            self.set(shade, color);
        }
    }
}

/// Partial override of the raw ramp table
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawColorsPatch {
    #[serde(default)]
    pub blue: Option<GroupPatch<ShadesPatch>>,
    #[serde(default)]
    pub green: Option<GroupPatch<ShadesPatch>>,
    #[serde(default)]
    pub purple: Option<GroupPatch<ShadesPatch>>,
    #[serde(default)]
    pub orange: Option<GroupPatch<ShadesPatch>>,
    #[serde(default)]
    pub pink: Option<GroupPatch<ShadesPatch>>,
    #[serde(default)]
    pub teal: Option<GroupPatch<ShadesPatch>>,
    #[serde(default)]
    pub gray: Option<GroupPatch<ShadesPatch>>,
}

impl RawColorsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Merge for RawColors {
    type Patch = RawColorsPatch;

    fn merge(&mut self, patch: &RawColorsPatch) {
        let ramps = [
            (&mut self.blue, "blue", &patch.blue),
            (&mut self.green, "green", &patch.green),
            (&mut self.purple, "purple", &patch.purple),
            (&mut self.orange, "orange", &patch.orange),
            (&mut self.pink, "pink", &patch.pink),
            (&mut self.teal, "teal", &patch.teal),
            (&mut self.gray, "gray", &patch.gray),
        ];
        for (ramp, name, patch) in ramps {
            if let Some(patch) = patch {
                patch.apply_to(ramp, name);
            }
        }
    }

    fn fill(&mut self, color: Color) {
        for ramp in [
            &mut self.blue,
            &mut self.green,
            &mut self.purple,
            &mut self.orange,
            &mut self.pink,
            &mut self.teal,
            &mut self.gray,
        ] {
            ramp.fill(color);
        }
    }
}

/// Caller-supplied overrides applied on top of the derived theme colors
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    #[serde(default)]
    pub raw: RawColorsPatch,
    #[serde(default)]
    pub semantic: SemanticPatch,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty() && self.semantic.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GRAY};

    #[test]
    fn ramp_patch_keeps_unsupplied_shades() {
        let mut raw = RawColors::default();
        raw.merge(&RawColorsPatch {
            blue: Some(GroupPatch::Merge(ShadesPatch {
                s500: Some(Color::from_hex(0x0000FF)),
                ..Default::default()
            })),
            ..Default::default()
        });

        assert_eq!(raw.blue.get(Shade::S500), Color::from_hex(0x0000FF));
        assert_eq!(raw.blue.get(Shade::S400), BLUE.get(Shade::S400));
        assert_eq!(raw.gray, GRAY);
        // the registry constant is untouched
        assert_eq!(BLUE.get(Shade::S500), Color::from_hex(0x3B82F6));
    }

    #[test]
    fn deserializes_nested_and_scalar_patches() {
        let overrides: ThemeOverrides = toml::from_str(
            r##"
            [raw.green]
            "500" = "#00ff00"

            [semantic]
            shadow = "#000000"

            [semantic.status]
            error = "#111111"
            "##,
        )
        .unwrap();

        assert_eq!(
            overrides.raw.green,
            Some(GroupPatch::Merge(ShadesPatch {
                s500: Some(Color::from_hex(0x00FF00)),
                ..Default::default()
            }))
        );
        assert_eq!(
            overrides.semantic.shadow,
            Some(GroupPatch::Replace(Color::BLACK))
        );
        assert!(matches!(
            overrides.semantic.status,
            Some(GroupPatch::Merge(ref status)) if status.error == Some(Color::from_hex(0x111111))
        ));
    }

    #[test]
    fn unknown_override_keys_are_rejected() {
        let result: Result<ThemeOverrides, _> = toml::from_str(
            r##"
            [semantic.status]
            danger = "#111111"
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_overrides() {
        assert!(ThemeOverrides::default().is_empty());
    }
}
