//! Semantic color tokens
//!
//! Each role group is generic over its slot type: `SemanticColors<Color>` is
//! what a theme carries, `SemanticColors<Source>` is a mode's role table.
//! Both have the same shape, so a table cannot leave a role unassigned.

use crate::color::Color;
use crate::overrides::{GroupPatch, Merge};
use crate::tree::{visit_group, TokenNode, TokenVisitor};
use serde::Deserialize;

macro_rules! color_group {
    (
        $(#[$meta:meta])*
        $name:ident, $patch:ident {
            $($field:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name<T = Color> {
            $(pub $field: T,)+
        }

        impl<T> $name<T> {
            /// Resolve every slot, in declaration order
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name {
                    $($field: f(self.$field),)+
                }
            }
        }

        #[doc = concat!("Partial override of [`", stringify!($name), "`]")]
        #[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $patch {
            $(
                #[serde(default, rename = $key)]
                pub $field: Option<Color>,
            )+
        }

        impl Merge for $name {
            type Patch = $patch;

            fn merge(&mut self, patch: &$patch) {
                $(
                    if let Some(color) = patch.$field {
                        self.$field = color;
                    }
                )+
            }

            fn fill(&mut self, color: Color) {
                $(self.$field = color;)+
            }
        }

        impl TokenNode for $name {
            fn visit(&self, visitor: &mut dyn TokenVisitor) {
                $(visitor.leaf($key, &self.$field);)+
            }
        }
    };
}

color_group! {
    /// Page and container backgrounds
    BackgroundColors, BackgroundPatch {
        primary => "primary",
        secondary => "secondary",
        tertiary => "tertiary",
        elevated => "elevated",
        overlay => "overlay",
    }
}

color_group! {
    /// Card, panel and sheet surfaces
    SurfaceColors, SurfacePatch {
        primary => "primary",
        secondary => "secondary",
        tertiary => "tertiary",
        elevated => "elevated",
        overlay => "overlay",
    }
}

color_group! {
    TextColors, TextPatch {
        primary => "primary",
        secondary => "secondary",
        tertiary => "tertiary",
        disabled => "disabled",
        inverse => "inverse",
    }
}

color_group! {
    BorderColors, BorderPatch {
        primary => "primary",
        secondary => "secondary",
        focus => "focus",
        error => "error",
        success => "success",
        warning => "warning",
    }
}

color_group! {
    /// Interactive element states
    ActionColors, ActionPatch {
        primary => "primary",
        secondary => "secondary",
        tertiary => "tertiary",
        hover => "hover",
        pressed => "pressed",
        disabled => "disabled",
        focus => "focus",
    }
}

color_group! {
    /// Feedback colors; fixed per mode, independent of the accent family
    StatusColors, StatusPatch {
        error => "error",
        warning => "warning",
        success => "success",
        info => "info",
    }
}

color_group! {
    ShadowColors, ShadowColorPatch {
        small => "small",
        medium => "medium",
        large => "large",
        colored => "colored",
    }
}

/// Complete set of semantic color roles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SemanticColors<T = Color> {
    pub background: BackgroundColors<T>,
    pub surface: SurfaceColors<T>,
    pub text: TextColors<T>,
    pub border: BorderColors<T>,
    pub action: ActionColors<T>,
    pub status: StatusColors<T>,
    pub shadow: ShadowColors<T>,
}

impl<T> SemanticColors<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SemanticColors<U> {
        SemanticColors {
            background: self.background.map(&mut f),
            surface: self.surface.map(&mut f),
            text: self.text.map(&mut f),
            border: self.border.map(&mut f),
            action: self.action.map(&mut f),
            status: self.status.map(&mut f),
            shadow: self.shadow.map(&mut f),
        }
    }
}

/// Partial override of [`SemanticColors`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SemanticPatch {
    #[serde(default)]
    pub background: Option<GroupPatch<BackgroundPatch>>,
    #[serde(default)]
    pub surface: Option<GroupPatch<SurfacePatch>>,
    #[serde(default)]
    pub text: Option<GroupPatch<TextPatch>>,
    #[serde(default)]
    pub border: Option<GroupPatch<BorderPatch>>,
    #[serde(default)]
    pub action: Option<GroupPatch<ActionPatch>>,
    #[serde(default)]
    pub status: Option<GroupPatch<StatusPatch>>,
    #[serde(default)]
    pub shadow: Option<GroupPatch<ShadowColorPatch>>,
}

impl SemanticPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Merge for SemanticColors {
    type Patch = SemanticPatch;

    fn merge(&mut self, patch: &SemanticPatch) {
        apply(&mut self.background, "background", patch.background.as_ref());
        apply(&mut self.surface, "surface", patch.surface.as_ref());
        apply(&mut self.text, "text", patch.text.as_ref());
        apply(&mut self.border, "border", patch.border.as_ref());
        apply(&mut self.action, "action", patch.action.as_ref());
        apply(&mut self.status, "status", patch.status.as_ref());
        apply(&mut self.shadow, "shadow", patch.shadow.as_ref());
    }

    fn fill(&mut self, color: Color) {
        self.background.fill(color);
        self.surface.fill(color);
        self.text.fill(color);
        self.border.fill(color);
        self.action.fill(color);
        self.status.fill(color);
        self.shadow.fill(color);
    }
}

fn apply<M: Merge>(target: &mut M, group: &str, patch: Option<&GroupPatch<M::Patch>>) {
    if let Some(patch) = patch {
        patch.apply_to(target, group);
    }
}

impl TokenNode for SemanticColors {
    fn visit(&self, visitor: &mut dyn TokenVisitor) {
        visit_group(visitor, "background", &self.background);
        visit_group(visitor, "surface", &self.surface);
        visit_group(visitor, "text", &self.text);
        visit_group(visitor, "border", &self.border);
        visit_group(visitor, "action", &self.action);
        visit_group(visitor, "status", &self.status);
        visit_group(visitor, "shadow", &self.shadow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(color: Color) -> SemanticColors {
        let group5 = BackgroundColors {
            primary: color,
            secondary: color,
            tertiary: color,
            elevated: color,
            overlay: color,
        };
        SemanticColors {
            background: group5,
            surface: SurfaceColors {
                primary: color,
                secondary: color,
                tertiary: color,
                elevated: color,
                overlay: color,
            },
            text: TextColors {
                primary: color,
                secondary: color,
                tertiary: color,
                disabled: color,
                inverse: color,
            },
            border: BorderColors {
                primary: color,
                secondary: color,
                focus: color,
                error: color,
                success: color,
                warning: color,
            },
            action: ActionColors {
                primary: color,
                secondary: color,
                tertiary: color,
                hover: color,
                pressed: color,
                disabled: color,
                focus: color,
            },
            status: StatusColors {
                error: color,
                warning: color,
                success: color,
                info: color,
            },
            shadow: ShadowColors {
                small: color,
                medium: color,
                large: color,
                colored: color,
            },
        }
    }

    #[test]
    fn merge_replaces_only_supplied_leaves() {
        let mut colors = flat(Color::WHITE);
        colors.merge(&SemanticPatch {
            text: Some(GroupPatch::Merge(TextPatch {
                primary: Some(Color::BLACK),
                ..Default::default()
            })),
            ..Default::default()
        });

        assert_eq!(colors.text.primary, Color::BLACK);
        assert_eq!(colors.text.secondary, Color::WHITE);
        assert_eq!(colors.background, flat(Color::WHITE).background);
    }

    #[test]
    fn scalar_patch_replaces_whole_group() {
        let red = Color::from_hex(0xFF0000);
        let mut colors = flat(Color::WHITE);
        colors.merge(&SemanticPatch {
            status: Some(GroupPatch::Replace(red)),
            ..Default::default()
        });

        assert_eq!(colors.status, flat(red).status);
        assert_eq!(colors.border, flat(Color::WHITE).border);
    }

    #[test]
    fn walk_covers_every_role() {
        let mut collector = crate::tree::LeafCollector::default();
        flat(Color::BLACK).visit(&mut collector);
        assert_eq!(collector.leaves.len(), 5 + 5 + 5 + 6 + 7 + 4 + 4);
        assert_eq!(collector.leaves[0].0, "background.primary");
        assert_eq!(collector.leaves[36 - 1].0, "shadow.colored");
    }
}
