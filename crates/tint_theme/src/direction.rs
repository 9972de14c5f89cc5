//! Bidirectional layout helpers
//!
//! Logical properties name an edge relative to the reading direction
//! (start/end). Views resolve them to physical left/right properties for
//! the active [`Direction`] on every render pass.

use crate::block::{stringify, FlatTokenMap};
use crate::error::ThemeError;
use crate::tree::kebab_case;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Text direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn id(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn all() -> &'static [Direction] {
        const DIRECTIONS: [Direction; 2] = [Direction::Ltr, Direction::Rtl];
        &DIRECTIONS
    }

    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
        }
    }

    /// Physical side the logical start edge lands on
    pub fn start_side(self) -> PhysicalSide {
        match self {
            Self::Ltr => PhysicalSide::Left,
            Self::Rtl => PhysicalSide::Right,
        }
    }

    pub fn end_side(self) -> PhysicalSide {
        self.start_side().opposite()
    }

    /// `1` for ltr, `-1` for rtl
    pub fn sign(self) -> i8 {
        match self {
            Self::Ltr => 1,
            Self::Rtl => -1,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Direction {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|direction| direction.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownDirection(s.to_string()))
    }
}

impl TryFrom<String> for Direction {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.id().to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhysicalSide {
    Left,
    Right,
}

impl PhysicalSide {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Logical edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Start,
    End,
}

/// Direction-independent style property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalProperty {
    MarginStart,
    MarginEnd,
    PaddingStart,
    PaddingEnd,
    BorderStartWidth,
    BorderEndWidth,
    BorderStartColor,
    BorderEndColor,
    BorderStartStyle,
    BorderEndStyle,
    BorderTopStartRadius,
    BorderTopEndRadius,
    BorderBottomStartRadius,
    BorderBottomEndRadius,
    InsetStart,
    InsetEnd,
    TextAlignStart,
    TextAlignEnd,
}

/// What a property styles, independent of the edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Facet {
    Margin,
    Padding,
    BorderWidth,
    BorderColor,
    BorderStyle,
    BorderTopRadius,
    BorderBottomRadius,
    Inset,
    TextAlign,
}

impl LogicalProperty {
    pub const ALL: [LogicalProperty; 18] = [
        LogicalProperty::MarginStart,
        LogicalProperty::MarginEnd,
        LogicalProperty::PaddingStart,
        LogicalProperty::PaddingEnd,
        LogicalProperty::BorderStartWidth,
        LogicalProperty::BorderEndWidth,
        LogicalProperty::BorderStartColor,
        LogicalProperty::BorderEndColor,
        LogicalProperty::BorderStartStyle,
        LogicalProperty::BorderEndStyle,
        LogicalProperty::BorderTopStartRadius,
        LogicalProperty::BorderTopEndRadius,
        LogicalProperty::BorderBottomStartRadius,
        LogicalProperty::BorderBottomEndRadius,
        LogicalProperty::InsetStart,
        LogicalProperty::InsetEnd,
        LogicalProperty::TextAlignStart,
        LogicalProperty::TextAlignEnd,
    ];

    /// camelCase property name
    pub fn name(self) -> &'static str {
        match self {
            Self::MarginStart => "marginStart",
            Self::MarginEnd => "marginEnd",
            Self::PaddingStart => "paddingStart",
            Self::PaddingEnd => "paddingEnd",
            Self::BorderStartWidth => "borderStartWidth",
            Self::BorderEndWidth => "borderEndWidth",
            Self::BorderStartColor => "borderStartColor",
            Self::BorderEndColor => "borderEndColor",
            Self::BorderStartStyle => "borderStartStyle",
            Self::BorderEndStyle => "borderEndStyle",
            Self::BorderTopStartRadius => "borderTopStartRadius",
            Self::BorderTopEndRadius => "borderTopEndRadius",
            Self::BorderBottomStartRadius => "borderBottomStartRadius",
            Self::BorderBottomEndRadius => "borderBottomEndRadius",
            Self::InsetStart => "insetStart",
            Self::InsetEnd => "insetEnd",
            Self::TextAlignStart => "textAlignStart",
            Self::TextAlignEnd => "textAlignEnd",
        }
    }

    pub fn edge(self) -> Edge {
        match self {
            Self::MarginStart
            | Self::PaddingStart
            | Self::BorderStartWidth
            | Self::BorderStartColor
            | Self::BorderStartStyle
            | Self::BorderTopStartRadius
            | Self::BorderBottomStartRadius
            | Self::InsetStart
            | Self::TextAlignStart => Edge::Start,
            _ => Edge::End,
        }
    }

    /// The same property on the other logical edge
    pub fn counterpart(self) -> Self {
        match self {
            Self::MarginStart => Self::MarginEnd,
            Self::MarginEnd => Self::MarginStart,
            Self::PaddingStart => Self::PaddingEnd,
            Self::PaddingEnd => Self::PaddingStart,
            Self::BorderStartWidth => Self::BorderEndWidth,
            Self::BorderEndWidth => Self::BorderStartWidth,
            Self::BorderStartColor => Self::BorderEndColor,
            Self::BorderEndColor => Self::BorderStartColor,
            Self::BorderStartStyle => Self::BorderEndStyle,
            Self::BorderEndStyle => Self::BorderStartStyle,
            Self::BorderTopStartRadius => Self::BorderTopEndRadius,
            Self::BorderTopEndRadius => Self::BorderTopStartRadius,
            Self::BorderBottomStartRadius => Self::BorderBottomEndRadius,
            Self::BorderBottomEndRadius => Self::BorderBottomStartRadius,
            Self::InsetStart => Self::InsetEnd,
            Self::InsetEnd => Self::InsetStart,
            Self::TextAlignStart => Self::TextAlignEnd,
            Self::TextAlignEnd => Self::TextAlignStart,
        }
    }

    fn facet(self) -> Facet {
        match self {
            Self::MarginStart | Self::MarginEnd => Facet::Margin,
            Self::PaddingStart | Self::PaddingEnd => Facet::Padding,
            Self::BorderStartWidth | Self::BorderEndWidth => Facet::BorderWidth,
            Self::BorderStartColor | Self::BorderEndColor => Facet::BorderColor,
            Self::BorderStartStyle | Self::BorderEndStyle => Facet::BorderStyle,
            Self::BorderTopStartRadius | Self::BorderTopEndRadius => Facet::BorderTopRadius,
            Self::BorderBottomStartRadius | Self::BorderBottomEndRadius => {
                Facet::BorderBottomRadius
            }
            Self::InsetStart | Self::InsetEnd => Facet::Inset,
            Self::TextAlignStart | Self::TextAlignEnd => Facet::TextAlign,
        }
    }
}

/// Physical style property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhysicalProperty {
    MarginLeft,
    MarginRight,
    PaddingLeft,
    PaddingRight,
    BorderLeftWidth,
    BorderRightWidth,
    BorderLeftColor,
    BorderRightColor,
    BorderLeftStyle,
    BorderRightStyle,
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderBottomLeftRadius,
    BorderBottomRightRadius,
    Left,
    Right,
    TextAlign,
}

impl PhysicalProperty {
    /// camelCase property name
    pub fn name(self) -> &'static str {
        match self {
            Self::MarginLeft => "marginLeft",
            Self::MarginRight => "marginRight",
            Self::PaddingLeft => "paddingLeft",
            Self::PaddingRight => "paddingRight",
            Self::BorderLeftWidth => "borderLeftWidth",
            Self::BorderRightWidth => "borderRightWidth",
            Self::BorderLeftColor => "borderLeftColor",
            Self::BorderRightColor => "borderRightColor",
            Self::BorderLeftStyle => "borderLeftStyle",
            Self::BorderRightStyle => "borderRightStyle",
            Self::BorderTopLeftRadius => "borderTopLeftRadius",
            Self::BorderTopRightRadius => "borderTopRightRadius",
            Self::BorderBottomLeftRadius => "borderBottomLeftRadius",
            Self::BorderBottomRightRadius => "borderBottomRightRadius",
            Self::Left => "left",
            Self::Right => "right",
            Self::TextAlign => "textAlign",
        }
    }

    /// Stylesheet property name (`margin-left`)
    pub fn css_name(self) -> String {
        kebab_case(self.name())
    }
}

/// Resolve a logical property to the physical property it styles under `direction`
pub fn resolve(property: LogicalProperty, direction: Direction) -> PhysicalProperty {
    use PhysicalProperty as P;

    let (left, right) = match property.facet() {
        Facet::Margin => (P::MarginLeft, P::MarginRight),
        Facet::Padding => (P::PaddingLeft, P::PaddingRight),
        Facet::BorderWidth => (P::BorderLeftWidth, P::BorderRightWidth),
        Facet::BorderColor => (P::BorderLeftColor, P::BorderRightColor),
        Facet::BorderStyle => (P::BorderLeftStyle, P::BorderRightStyle),
        Facet::BorderTopRadius => (P::BorderTopLeftRadius, P::BorderTopRightRadius),
        Facet::BorderBottomRadius => (P::BorderBottomLeftRadius, P::BorderBottomRightRadius),
        Facet::Inset => (P::Left, P::Right),
        Facet::TextAlign => return P::TextAlign,
    };

    let side = match property.edge() {
        Edge::Start => direction.start_side(),
        Edge::End => direction.end_side(),
    };
    match side {
        PhysicalSide::Left => left,
        PhysicalSide::Right => right,
    }
}

/// Resolve one declaration to its physical property and value
///
/// Text alignment resolves to `textAlign: left|right` and ignores `value`;
/// every other property keeps `value` as given.
pub fn resolve_declaration(
    property: LogicalProperty,
    value: &str,
    direction: Direction,
) -> (PhysicalProperty, String) {
    let physical = resolve(property, direction);
    let value = match property {
        LogicalProperty::TextAlignStart => direction.start_side().id().to_string(),
        LogicalProperty::TextAlignEnd => direction.end_side().id().to_string(),
        _ => value.to_string(),
    };
    (physical, value)
}

/// Resolve a set of logical declarations into a physical property map
///
/// Keys are camelCase physical property names. A later declaration that
/// lands on the same physical property replaces the earlier value.
pub fn resolve_style<'a>(
    declarations: impl IntoIterator<Item = (LogicalProperty, &'a str)>,
    direction: Direction,
) -> IndexMap<&'static str, String> {
    declarations
        .into_iter()
        .map(|(property, value)| {
            let (physical, value) = resolve_declaration(property, value, direction);
            (physical.name(), value)
        })
        .collect()
}

/// Invert the sign of a numeric or length value under rtl
///
/// Under ltr the value is returned unchanged. Under rtl `-8px` becomes
/// `8px`, and `8px` or `+8px` becomes `-8px`; the magnitude and unit are
/// kept. Only a single `[+-]number[unit]` token is flipped: keywords such
/// as `auto` and multi-value strings such as `8px 4px` are returned
/// unchanged.
pub fn flip_value(value: &str, direction: Direction) -> String {
    if !direction.is_rtl() {
        return value.to_string();
    }

    if let Some(magnitude) = value.strip_prefix('-') {
        if is_length(magnitude) {
            return magnitude.to_string();
        }
    } else if let Some(magnitude) = value.strip_prefix('+') {
        if is_length(magnitude) {
            return format!("-{magnitude}");
        }
    } else if is_length(value) {
        return format!("-{value}");
    }
    value.to_string()
}

/// An unsigned number followed by an optional alphabetic unit or `%`
fn is_length(value: &str) -> bool {
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let digits = number.chars().filter(char::is_ascii_digit).count();
    let dots = number.len() - digits;
    let unit_ok = unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic());

    digits > 0 && dots <= 1 && unit_ok
}

/// Horizontal transform applied to direction-sensitive icons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconTransform {
    Identity,
    MirrorX,
}

impl IconTransform {
    pub fn css(self) -> &'static str {
        match self {
            Self::Identity => "none",
            Self::MirrorX => "scaleX(-1)",
        }
    }
}

impl Display for IconTransform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css())
    }
}

/// Mirror icons (arrows, chevrons) under rtl
pub fn flip_icon(direction: Direction) -> IconTransform {
    match direction {
        Direction::Ltr => IconTransform::Identity,
        Direction::Rtl => IconTransform::MirrorX,
    }
}

/// Primary language subtags written right-to-left
pub const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "iw", "ks", "ps", "sd", "ug", "ur", "yi",
];

/// Direction of a BCP 47-style language code (`ar-EG`, `he_IL`, `en`)
///
/// Only the primary subtag is considered. Unknown languages are ltr.
pub fn detect_direction_from_language(code: &str) -> Direction {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if RTL_LANGUAGES.contains(&primary.as_str()) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// Direction-dependent variables of one `[dir]` scope
pub fn direction_variables(direction: Direction) -> FlatTokenMap {
    let mut vars = FlatTokenMap::default();
    vars.insert("--direction", direction.id());
    vars.insert("--direction-sign", direction.sign().to_string());
    vars.insert("--icon-transform", flip_icon(direction).css());
    vars.insert("--text-align-start", direction.start_side().id());
    vars.insert("--text-align-end", direction.end_side().id());
    vars
}

/// One `[dir="..."]` block per direction
pub fn generate_direction_blocks() -> String {
    Direction::all()
        .iter()
        .map(|direction| {
            let selector = format!("[dir=\"{direction}\"]");
            stringify(&direction_variables(*direction), &selector)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
