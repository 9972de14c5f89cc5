//! Box shadow tokens for theming
//!
//! These are the mode-independent elevation shadows. The tinted shadow
//! colors that follow the brightness mode live in
//! [`ShadowColors`](super::ShadowColors).

use crate::tree::token_leaves;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Inner,
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowTokens {
    pub shadow_none: &'static str,
    pub shadow_sm: &'static str,
    pub shadow_md: &'static str,
    pub shadow_lg: &'static str,
    pub shadow_xl: &'static str,
    pub shadow_inner: &'static str,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &'static str {
        match token {
            ShadowToken::None => self.shadow_none,
            ShadowToken::Sm => self.shadow_sm,
            ShadowToken::Md => self.shadow_md,
            ShadowToken::Lg => self.shadow_lg,
            ShadowToken::Xl => self.shadow_xl,
            ShadowToken::Inner => self.shadow_inner,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            shadow_none: "none",
            shadow_sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            shadow_md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
            shadow_lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
            shadow_xl: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
            shadow_inner: "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
        }
    }
}

token_leaves!(ShadowTokens {
    shadow_none => "none",
    shadow_sm => "sm",
    shadow_md => "md",
    shadow_lg => "lg",
    shadow_xl => "xl",
    shadow_inner => "inner",
});
