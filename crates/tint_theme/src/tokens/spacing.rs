//! Spacing and breakpoint tokens

use crate::tree::token_leaves;

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    None,
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
}

/// Spacing scale, 4px based
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpacingTokens {
    pub none: &'static str,
    pub xxs: &'static str,
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xl2: &'static str,
    pub xl3: &'static str,
}

impl SpacingTokens {
    /// Get spacing by token key
    pub fn get(&self, token: SpacingToken) -> &'static str {
        match token {
            SpacingToken::None => self.none,
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xl2 => self.xl2,
            SpacingToken::Xl3 => self.xl3,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            none: "0",
            xxs: "0.125rem",
            xs: "0.25rem",
            sm: "0.5rem",
            md: "1rem",
            lg: "1.5rem",
            xl: "2rem",
            xl2: "3rem",
            xl3: "4rem",
        }
    }
}

token_leaves!(SpacingTokens {
    none => "none",
    xxs => "xxs",
    xs => "xs",
    sm => "sm",
    md => "md",
    lg => "lg",
    xl => "xl",
    xl2 => "2xl",
    xl3 => "3xl",
});

/// Minimum viewport widths of the responsive breakpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointTokens {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xl2: &'static str,
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            sm: "640px",
            md: "768px",
            lg: "1024px",
            xl: "1280px",
            xl2: "1536px",
        }
    }
}

token_leaves!(BreakpointTokens {
    sm => "sm",
    md => "md",
    lg => "lg",
    xl => "xl",
    xl2 => "2xl",
});
