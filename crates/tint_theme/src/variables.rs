//! Flattened theme variables
//!
//! A [`Theme`] flattens into one `--kebab-path: value` entry per scalar
//! token. Entry order follows token declaration order, so regenerating the
//! variables for an unchanged configuration yields byte-identical text.

use crate::block::{stringify, FlatTokenMap};
use crate::direction::Direction;
use crate::mode::BrightnessMode;
use crate::palette::ColorFamily;
use crate::theme::{create_theme, Theme, ThemeConfig};
use crate::tree::{kebab_case, TokenNode, TokenVisitor};
use std::fmt;

struct Flattener {
    prefix: Vec<String>,
    map: FlatTokenMap,
}

impl TokenVisitor for Flattener {
    fn enter(&mut self, key: &'static str) {
        self.prefix.push(kebab_case(key));
    }

    fn leaf(&mut self, key: &'static str, value: &dyn fmt::Display) {
        let mut name = String::from("--");
        for segment in &self.prefix {
            name.push_str(segment);
            name.push('-');
        }
        name.push_str(&kebab_case(key));
        self.map.insert(name, value.to_string());
    }

    fn exit(&mut self) {
        self.prefix.pop();
    }
}

/// Flatten a theme into variables
///
/// The three meta entries (`--mode`, `--color-family`, `--direction`) come
/// first, followed by one entry per token.
pub fn flatten(theme: &Theme) -> FlatTokenMap {
    let mut map = FlatTokenMap::default();
    map.insert("--mode", theme.mode.id());
    map.insert("--color-family", theme.color_family.id());
    map.insert("--direction", theme.direction.id());

    let mut flattener = Flattener {
        prefix: Vec::new(),
        map,
    };
    theme.visit(&mut flattener);

    tracing::trace!(
        variables = flattener.map.len(),
        family = %theme.color_family,
        mode = %theme.mode,
        "flattened theme"
    );
    flattener.map
}

/// Attribute selector matching one configuration
pub fn config_selector(family: ColorFamily, mode: BrightnessMode, direction: Direction) -> String {
    format!("[data-color-family=\"{family}\"][data-mode=\"{mode}\"][data-direction=\"{direction}\"]")
}

/// Variables for every reachable configuration
///
/// The first block is the unscoped default under `:root`, followed by one
/// block per family x mode x direction in declaration order.
pub fn generate_theme_variables() -> String {
    generate_theme_variables_with(&ThemeConfig::default())
}

/// [`generate_theme_variables`] with a custom default configuration
///
/// `base` selects the `:root` block; its overrides apply to every block.
pub fn generate_theme_variables_with(base: &ThemeConfig) -> String {
    let mut blocks = vec![stringify(&flatten(&create_theme(base)), ":root")];

    for family in ColorFamily::all() {
        for mode in BrightnessMode::all() {
            for direction in Direction::all() {
                let config = base
                    .clone()
                    .with_family(*family)
                    .with_mode(*mode)
                    .with_direction(*direction);
                let selector = config_selector(*family, *mode, *direction);
                blocks.push(stringify(&flatten(&create_theme(&config)), &selector));
            }
        }
    }

    tracing::debug!(blocks = blocks.len(), "generated theme variables");
    blocks.join("\n\n")
}

/// Transition durations collapsed to `0ms` under `prefers-reduced-motion`
pub fn generate_reduced_motion_block() -> String {
    let mut vars = FlatTokenMap::default();
    for (key, _) in flatten(&Theme::default()).iter() {
        if key.starts_with("--transitions-duration-") {
            vars.insert(key, "0ms");
        }
    }

    let body = stringify(&vars, ":root")
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("@media (prefers-reduced-motion: reduce) {{\n{body}\n}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_entries_come_first() {
        let map = flatten(&Theme::default());
        let first: Vec<&str> = map.keys().take(3).collect();
        assert_eq!(first, ["--mode", "--color-family", "--direction"]);
        assert_eq!(map.get("--mode"), Some("light"));
        assert_eq!(map.get("--color-family"), Some("blue"));
        assert_eq!(map.get("--direction"), Some("ltr"));
    }

    #[test]
    fn keys_are_kebab_cased_paths() {
        let map = flatten(&Theme::default());
        assert_eq!(map.get("--colors-raw-blue-500"), Some("#3b82f6"));
        assert_eq!(
            map.get("--colors-semantic-background-primary"),
            Some("#ffffff")
        );
        assert_eq!(map.get("--typography-font-size-2xl"), Some("1.5rem"));
        assert_eq!(map.get("--typography-line-height-normal"), Some("1.5"));
        assert_eq!(map.get("--border-radius-full"), Some("9999px"));
        assert_eq!(
            map.get("--transitions-timing-ease-in-out"),
            Some("cubic-bezier(0.4, 0, 0.6, 1)")
        );
        assert_eq!(map.get("--z-index-hide"), Some("-1"));
    }

    #[test]
    fn one_entry_per_leaf_plus_meta() {
        let theme = Theme::default();
        assert_eq!(flatten(&theme).len(), theme.leaves().len() + 3);
    }

    #[test]
    fn selector_names_every_attribute() {
        assert_eq!(
            config_selector(ColorFamily::Green, BrightnessMode::Black, Direction::Rtl),
            "[data-color-family=\"green\"][data-mode=\"black\"][data-direction=\"rtl\"]"
        );
    }

    #[test]
    fn bulk_output_has_default_plus_every_configuration() {
        let css = generate_theme_variables();
        assert!(css.starts_with(":root {\n  --mode: light;"));
        assert_eq!(css.matches("[data-color-family=").count(), 6 * 3 * 2);
        assert_eq!(css.matches(" {\n").count(), 6 * 3 * 2 + 1);
        assert_eq!(css, generate_theme_variables());
    }

    #[test]
    fn reduced_motion_zeroes_durations() {
        let css = generate_reduced_motion_block();
        assert_eq!(
            css,
            "@media (prefers-reduced-motion: reduce) {\n  :root {\n    \
             --transitions-duration-instant: 0ms;\n    \
             --transitions-duration-fast: 0ms;\n    \
             --transitions-duration-normal: 0ms;\n    \
             --transitions-duration-slow: 0ms;\n  }\n}"
        );
    }
}
