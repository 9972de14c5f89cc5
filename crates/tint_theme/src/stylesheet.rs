//! Complete stylesheet
//!
//! Composes the independent generators into one document. The generators
//! never call back into this module.

use crate::direction::generate_direction_blocks;
use crate::theme::ThemeConfig;
use crate::variables::{generate_reduced_motion_block, generate_theme_variables_with};

/// Theme variables for every configuration, direction scopes and the
/// reduced-motion block, separated by blank lines
pub fn generate_stylesheet() -> String {
    generate_stylesheet_with(&ThemeConfig::default())
}

/// [`generate_stylesheet`] with a custom default configuration
pub fn generate_stylesheet_with(base: &ThemeConfig) -> String {
    let sections = [
        generate_theme_variables_with(base),
        generate_direction_blocks(),
        generate_reduced_motion_block(),
    ];

    let mut css = sections.join("\n\n");
    css.push('\n');
    css
}
