//! tint configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tint_theme::ThemeConfig;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "tint.toml";

/// Top-level tint configuration (tint.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TintConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how generated CSS is written
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Stylesheet destination; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Selector for `tint tokens --format css`
    #[serde(default)]
    pub selector: Option<String>,
}

impl TintConfig {
    /// Load from an explicit file, or from `tint.toml` in `dir` if present
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = dir.join(CONFIG_FILE);
                if path.is_file() {
                    Self::load_file(&path)
                } else {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_theme::{BrightnessMode, ColorFamily, Direction};

    #[test]
    fn empty_file_uses_defaults() {
        let config = TintConfig::parse("").unwrap();
        assert_eq!(config.theme, ThemeConfig::default());
        assert!(config.output.path.is_none());
        assert!(config.output.selector.is_none());
    }

    #[test]
    fn parses_theme_and_output_sections() {
        let config = TintConfig::parse(
            r##"
            [theme]
            family = "teal"
            mode = "black"
            direction = "rtl"

            [theme.overrides.semantic.status]
            error = "#111111"

            [output]
            path = "dist/theme.css"
            selector = ".app"
            "##,
        )
        .unwrap();

        let selection = config.theme.selection();
        assert_eq!(selection.color_family, ColorFamily::Teal);
        assert_eq!(selection.mode, BrightnessMode::Black);
        assert_eq!(selection.direction, Direction::Rtl);
        assert!(!config.theme.overrides.is_empty());
        assert_eq!(config.output.path, Some(PathBuf::from("dist/theme.css")));
        assert_eq!(config.output.selector.as_deref(), Some(".app"));
    }

    #[test]
    fn unknown_family_is_an_error() {
        let result = TintConfig::parse(
            r##"
            [theme]
            family = "crimson"
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_is_an_error() {
        assert!(TintConfig::parse("[build]\nentry = \"x\"").is_err());
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let dir = std::env::temp_dir().join("tint-config-missing");
        let config = TintConfig::load(None, &dir).unwrap();
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("tint-config-missing").join("nope.toml");
        assert!(TintConfig::load(Some(&path), Path::new(".")).is_err());
    }
}
