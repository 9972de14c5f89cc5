//! Transition durations and timing functions

use crate::tree::{token_leaves, visit_group, TokenNode, TokenVisitor};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Durations {
    pub instant: &'static str,
    pub fast: &'static str,
    pub normal: &'static str,
    pub slow: &'static str,
}

token_leaves!(Durations {
    instant => "instant",
    fast => "fast",
    normal => "normal",
    slow => "slow",
});

/// CSS easing functions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingFunctions {
    pub linear: &'static str,
    pub ease: &'static str,
    pub ease_in: &'static str,
    pub ease_out: &'static str,
    pub ease_in_out: &'static str,
}

token_leaves!(TimingFunctions {
    linear => "linear",
    ease => "ease",
    ease_in => "easeIn",
    ease_out => "easeOut",
    ease_in_out => "easeInOut",
});

/// Complete set of transition tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTokens {
    pub duration: Durations,
    pub timing: TimingFunctions,
}

impl Default for TransitionTokens {
    fn default() -> Self {
        Self {
            duration: Durations {
                instant: "0ms",
                fast: "150ms",
                normal: "250ms",
                slow: "350ms",
            },
            timing: TimingFunctions {
                linear: "linear",
                ease: "cubic-bezier(0.4, 0, 0.2, 1)",
                ease_in: "cubic-bezier(0.4, 0, 1, 1)",
                ease_out: "cubic-bezier(0, 0, 0.2, 1)",
                ease_in_out: "cubic-bezier(0.4, 0, 0.6, 1)",
            },
        }
    }
}

impl TokenNode for TransitionTokens {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        visit_group(visitor, "duration", &self.duration);
        visit_group(visitor, "timing", &self.timing);
    }
}
