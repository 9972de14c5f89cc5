//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Semantic colors (derived per mode and accent family)
//! - Typography (families, sizes, weights, line heights)
//! - Spacing and breakpoints
//! - Border radii
//! - Shadows
//! - Transition durations and timing functions
//! - Z-index layers

mod radius;
mod semantic;
mod shadow;
mod spacing;
mod transition;
mod typography;
mod z_index;

pub use radius::*;
pub use semantic::*;
pub use shadow::*;
pub use spacing::*;
pub use transition::*;
pub use typography::*;
pub use z_index::*;
