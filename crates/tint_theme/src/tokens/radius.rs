//! Border radius tokens for theming

use crate::tree::token_leaves;

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Full,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadiusTokens {
    pub radius_none: &'static str,
    pub radius_sm: &'static str,
    pub radius_md: &'static str,
    pub radius_lg: &'static str,
    pub radius_xl: &'static str,
    pub radius_2xl: &'static str,
    pub radius_full: &'static str,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> &'static str {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Xl2 => self.radius_2xl,
            RadiusToken::Full => self.radius_full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: "0",
            radius_sm: "0.125rem",
            radius_md: "0.375rem",
            radius_lg: "0.5rem",
            radius_xl: "0.75rem",
            radius_2xl: "1rem",
            radius_full: "9999px",
        }
    }
}

token_leaves!(RadiusTokens {
    radius_none => "none",
    radius_sm => "sm",
    radius_md => "md",
    radius_lg => "lg",
    radius_xl => "xl",
    radius_2xl => "2xl",
    radius_full => "full",
});
