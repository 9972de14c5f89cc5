//! tint Theme Engine
//!
//! A deterministic design-token engine: a configuration of accent color
//! family, brightness mode and text direction resolves to a complete set of
//! semantic styling tokens.
//!
//! # Overview
//!
//! The engine provides:
//! - **Palette registry**: six accent families and a neutral ramp, 11 shades each
//! - **Mode derivation**: fixed per-mode role tables for light, dark and true-black
//! - **Theme assembly**: colors plus typography, spacing, breakpoints, radii,
//!   shadows, transitions and z-index layers, with typed overrides
//! - **Flattened variables**: `--kebab-path: value` maps and stylesheet blocks
//! - **Bidirectional helpers**: logical start/end properties resolved to
//!   physical left/right for ltr and rtl
//!
//! # Quick Start
//!
//! ```rust
//! use tint_theme::{create_theme, flatten, get_theme_color, BrightnessMode, ColorFamily, ThemeConfig};
//!
//! let theme = create_theme(
//!     &ThemeConfig::new()
//!         .with_family(ColorFamily::Green)
//!         .with_mode(BrightnessMode::Black),
//! );
//!
//! assert_eq!(theme.colors.semantic.background.primary.to_string(), "#000000");
//! assert_eq!(get_theme_color(&theme, "colors.semantic.action.primary"), "#86efac");
//!
//! let vars = flatten(&theme);
//! assert_eq!(vars.get("--colors-semantic-action-primary"), Some("#86efac"));
//! ```
//!
//! # Purity
//!
//! Every function here is a pure function of its arguments. The only
//! stateful type is [`ThemeStore`], which an application owns explicitly
//! when it needs a shared, observable selection.
//!
//! # Failure policy
//!
//! - Unknown family, mode, direction or alpha-step names are a
//!   [`ThemeError`]; nothing falls back to a default.
//! - Looking up a token path or ramp step that does not exist logs a
//!   warning and yields `#000000`, so render loops keep going.
//! - A single color given where a group of overrides is expected replaces
//!   the whole group.

pub mod block;
pub mod color;
pub mod direction;
pub mod error;
pub mod mode;
pub mod overrides;
pub mod palette;
pub mod state;
pub mod stylesheet;
pub mod theme;
pub mod tokens;
pub mod tree;
pub mod variables;

// Re-export commonly used types
pub use block::{stringify, FlatTokenMap};
pub use color::{AlphaStep, Color};
pub use direction::{
    detect_direction_from_language, flip_icon, flip_value, resolve, resolve_declaration,
    resolve_style, Direction, IconTransform, LogicalProperty, PhysicalProperty,
};
pub use error::ThemeError;
pub use mode::{derive, derive_by_name, BrightnessMode};
pub use overrides::{GroupPatch, Merge, RawColorsPatch, ShadesPatch, ThemeOverrides};
pub use palette::{get_ramp, gray_ramp, with_alpha, ColorFamily, ColorShades, RawColors, Shade};
pub use state::{SubscriptionId, ThemeStore};
pub use stylesheet::{generate_stylesheet, generate_stylesheet_with};
pub use theme::{create_theme, get_theme_color, Theme, ThemeColors, ThemeConfig, ThemeSelection};
pub use tokens::*;
pub use variables::{config_selector, flatten, generate_theme_variables};
