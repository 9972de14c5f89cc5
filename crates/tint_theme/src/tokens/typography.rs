//! Typography tokens for theming

use crate::tree::{token_leaves, visit_group, TokenNode, TokenVisitor};

/// Font stacks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFamilies {
    pub sans: &'static str,
    pub serif: &'static str,
    pub mono: &'static str,
}

token_leaves!(FontFamilies {
    sans => "sans",
    serif => "serif",
    mono => "mono",
});

/// Font size scale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSizes {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xl2: &'static str,
    pub xl3: &'static str,
    pub xl4: &'static str,
}

token_leaves!(FontSizes {
    xs => "xs",
    sm => "sm",
    base => "base",
    lg => "lg",
    xl => "xl",
    xl2 => "2xl",
    xl3 => "3xl",
    xl4 => "4xl",
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontWeights {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

token_leaves!(FontWeights {
    light => "light",
    normal => "normal",
    medium => "medium",
    semibold => "semibold",
    bold => "bold",
});

/// Unitless line-height multipliers
#[derive(Clone, Debug, PartialEq)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

token_leaves!(LineHeights {
    tight => "tight",
    normal => "normal",
    relaxed => "relaxed",
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterSpacings {
    pub tight: &'static str,
    pub normal: &'static str,
    pub wide: &'static str,
}

token_leaves!(LetterSpacings {
    tight => "tight",
    normal => "normal",
    wide => "wide",
});

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
    pub letter_spacing: LetterSpacings,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                sans: "system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif",
                serif: "Georgia, Cambria, \"Times New Roman\", serif",
                mono: "ui-monospace, SFMono-Regular, Menlo, Consolas, monospace",
            },
            font_size: FontSizes {
                xs: "0.75rem",
                sm: "0.875rem",
                base: "1rem",
                lg: "1.125rem",
                xl: "1.25rem",
                xl2: "1.5rem",
                xl3: "1.875rem",
                xl4: "2.25rem",
            },
            font_weight: FontWeights {
                light: 300,
                normal: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
            line_height: LineHeights {
                tight: 1.25,
                normal: 1.5,
                relaxed: 1.75,
            },
            letter_spacing: LetterSpacings {
                tight: "-0.025em",
                normal: "0em",
                wide: "0.025em",
            },
        }
    }
}

impl TokenNode for TypographyTokens {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        visit_group(visitor, "fontFamily", &self.font_family);
        visit_group(visitor, "fontSize", &self.font_size);
        visit_group(visitor, "fontWeight", &self.font_weight);
        visit_group(visitor, "lineHeight", &self.line_height);
        visit_group(visitor, "letterSpacing", &self.letter_spacing);
    }
}
