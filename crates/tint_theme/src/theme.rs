//! Theme assembly
//!
//! [`create_theme`] is a pure function of its [`ThemeConfig`]: it derives
//! the semantic colors for the configured mode and family, applies the
//! caller's overrides on a copy of the registry, and attaches the static
//! scales. Nothing is cached and no ambient state is read.

use crate::direction::Direction;
use crate::error::ThemeError;
use crate::mode::{derive, BrightnessMode};
use crate::overrides::{Merge, ThemeOverrides};
use crate::palette::{ColorFamily, RawColors};
use crate::tokens::*;
use crate::tree::{visit_group, LeafCollector, PathLookup, TokenNode, TokenVisitor};
use serde::{Deserialize, Serialize};

/// Value returned by [`get_theme_color`] when a path does not name a token
pub const LOOKUP_FALLBACK: &str = "#000000";

/// The three user-selectable theme dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSelection {
    pub color_family: ColorFamily,
    pub mode: BrightnessMode,
    pub direction: Direction,
}

/// Input of [`create_theme`]; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(alias = "colorFamily", alias = "color_family")]
    pub family: Option<ColorFamily>,
    pub mode: Option<BrightnessMode>,
    pub direction: Option<Direction>,
    pub overrides: ThemeOverrides,
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: ColorFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_mode(mut self, mode: BrightnessMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_overrides(mut self, overrides: ThemeOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Build a config from user-supplied names
    ///
    /// `None` keeps the default; an unknown name is an error, never a
    /// silent fallback.
    pub fn from_names(
        family: Option<&str>,
        mode: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Self, ThemeError> {
        Ok(Self {
            family: family.map(str::parse).transpose()?,
            mode: mode.map(str::parse).transpose()?,
            direction: direction.map(str::parse).transpose()?,
            overrides: ThemeOverrides::default(),
        })
    }

    /// Parse a TOML document such as
    ///
    /// ```toml
    /// family = "green"
    /// mode = "dark"
    ///
    /// [overrides.semantic.status]
    /// error = "#111111"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// The selection this config resolves to, defaults filled in
    pub fn selection(&self) -> ThemeSelection {
        ThemeSelection {
            color_family: self.family.unwrap_or_default(),
            mode: self.mode.unwrap_or_default(),
            direction: self.direction.unwrap_or_default(),
        }
    }
}

impl From<ThemeSelection> for ThemeConfig {
    fn from(selection: ThemeSelection) -> Self {
        Self::new()
            .with_family(selection.color_family)
            .with_mode(selection.mode)
            .with_direction(selection.direction)
    }
}

/// Raw ramps plus the semantic roles derived from them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub raw: RawColors,
    pub semantic: SemanticColors,
}

impl TokenNode for ThemeColors {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        visit_group(visitor, "raw", &self.raw);
        visit_group(visitor, "semantic", &self.semantic);
    }
}

/// A fully resolved set of design tokens for one configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub mode: BrightnessMode,
    pub color_family: ColorFamily,
    pub direction: Direction,
    pub colors: ThemeColors,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub breakpoints: BreakpointTokens,
    pub border_radius: RadiusTokens,
    pub shadows: ShadowTokens,
    pub transitions: TransitionTokens,
    pub z_index: ZIndexTokens,
}

impl Theme {
    pub fn selection(&self) -> ThemeSelection {
        ThemeSelection {
            color_family: self.color_family,
            mode: self.mode,
            direction: self.direction,
        }
    }

    /// Value of the token at a dotted camelCase path, if there is one
    ///
    /// `mode`, `colorFamily` and `direction` name the selection itself.
    pub fn get(&self, path: &str) -> Option<String> {
        match path {
            "mode" => return Some(self.mode.to_string()),
            "colorFamily" => return Some(self.color_family.to_string()),
            "direction" => return Some(self.direction.to_string()),
            _ => {}
        }

        let mut lookup = PathLookup::new(path);
        self.visit(&mut lookup);
        lookup.found
    }

    /// Every token as `(dotted.path, value)`, in declaration order
    pub fn leaves(&self) -> Vec<(String, String)> {
        let mut collector = LeafCollector::default();
        self.visit(&mut collector);
        collector.leaves
    }
}

impl Default for Theme {
    fn default() -> Self {
        create_theme(&ThemeConfig::default())
    }
}

impl TokenNode for Theme {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        visit_group(visitor, "colors", &self.colors);
        visit_group(visitor, "typography", &self.typography);
        visit_group(visitor, "spacing", &self.spacing);
        visit_group(visitor, "breakpoints", &self.breakpoints);
        visit_group(visitor, "borderRadius", &self.border_radius);
        visit_group(visitor, "shadows", &self.shadows);
        visit_group(visitor, "transitions", &self.transitions);
        visit_group(visitor, "zIndex", &self.z_index);
    }
}

/// Assemble the theme for `config`
pub fn create_theme(config: &ThemeConfig) -> Theme {
    let selection = config.selection();
    tracing::debug!(
        family = %selection.color_family,
        mode = %selection.mode,
        direction = %selection.direction,
        overrides = !config.overrides.is_empty(),
        "creating theme"
    );

    let mut semantic = derive(selection.mode, selection.color_family);
    let mut raw = RawColors::default();
    if !config.overrides.raw.is_empty() {
        raw.merge(&config.overrides.raw);
    }
    if !config.overrides.semantic.is_empty() {
        semantic.merge(&config.overrides.semantic);
    }

    Theme {
        mode: selection.mode,
        color_family: selection.color_family,
        direction: selection.direction,
        colors: ThemeColors { raw, semantic },
        typography: TypographyTokens::default(),
        spacing: SpacingTokens::default(),
        breakpoints: BreakpointTokens::default(),
        border_radius: RadiusTokens::default(),
        shadows: ShadowTokens::default(),
        transitions: TransitionTokens::default(),
        z_index: ZIndexTokens::default(),
    }
}

/// Token value at a dotted path, e.g. `colors.semantic.text.primary`
///
/// Meant for render loops: a path that does not name a token logs a
/// warning and yields [`LOOKUP_FALLBACK`] instead of failing.
pub fn get_theme_color(theme: &Theme, path: &str) -> String {
    theme.get(path).unwrap_or_else(|| {
        tracing::warn!(path, "theme token not found, using {LOOKUP_FALLBACK}");
        LOOKUP_FALLBACK.to_string()
    })
}
