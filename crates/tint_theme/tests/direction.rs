use tint_theme::direction::generate_direction_blocks;
use tint_theme::{
    detect_direction_from_language, flip_icon, flip_value, resolve, resolve_style, Direction,
    IconTransform, LogicalProperty, PhysicalProperty,
};

#[test]
fn paired_properties_are_symmetric() {
    let pairs = [
        (LogicalProperty::MarginStart, LogicalProperty::MarginEnd),
        (LogicalProperty::PaddingStart, LogicalProperty::PaddingEnd),
        (LogicalProperty::BorderStartWidth, LogicalProperty::BorderEndWidth),
        (LogicalProperty::BorderStartColor, LogicalProperty::BorderEndColor),
        (LogicalProperty::BorderStartStyle, LogicalProperty::BorderEndStyle),
        (LogicalProperty::BorderTopStartRadius, LogicalProperty::BorderTopEndRadius),
        (LogicalProperty::BorderBottomStartRadius, LogicalProperty::BorderBottomEndRadius),
        (LogicalProperty::InsetStart, LogicalProperty::InsetEnd),
        (LogicalProperty::TextAlignStart, LogicalProperty::TextAlignEnd),
    ];

    for (start, end) in pairs {
        assert_eq!(resolve(start, Direction::Ltr), resolve(end, Direction::Rtl));
        assert_eq!(resolve(end, Direction::Ltr), resolve(start, Direction::Rtl));
    }
}

#[test]
fn card_style_under_both_directions() {
    let declarations = [
        (LogicalProperty::MarginStart, "16px"),
        (LogicalProperty::BorderStartWidth, "4px"),
        (LogicalProperty::BorderTopEndRadius, "8px"),
        (LogicalProperty::TextAlignStart, ""),
    ];

    let ltr = resolve_style(declarations, Direction::Ltr);
    assert_eq!(ltr.get("marginLeft").map(String::as_str), Some("16px"));
    assert_eq!(ltr.get("borderLeftWidth").map(String::as_str), Some("4px"));
    assert_eq!(ltr.get("borderTopRightRadius").map(String::as_str), Some("8px"));
    assert_eq!(ltr.get("textAlign").map(String::as_str), Some("left"));

    let rtl = resolve_style(declarations, Direction::Rtl);
    assert_eq!(rtl.get("marginRight").map(String::as_str), Some("16px"));
    assert_eq!(rtl.get("borderRightWidth").map(String::as_str), Some("4px"));
    assert_eq!(rtl.get("borderTopLeftRadius").map(String::as_str), Some("8px"));
    assert_eq!(rtl.get("textAlign").map(String::as_str), Some("right"));
    assert!(!rtl.contains_key("marginLeft"));
}

#[test]
fn flip_value_round_trips() {
    for value in ["0", "1px", "-1px", "2.5rem", "-0.75em", "50%", "-50%", "12"] {
        assert_eq!(flip_value(value, Direction::Ltr), value);
        assert_eq!(
            flip_value(&flip_value(value, Direction::Rtl), Direction::Rtl),
            value
        );
    }
}

#[test]
fn icon_transform_per_direction() {
    assert_eq!(flip_icon(Direction::Ltr), IconTransform::Identity);
    assert_eq!(flip_icon(Direction::Rtl), IconTransform::MirrorX);
    assert_eq!(flip_icon(Direction::Rtl).to_string(), "scaleX(-1)");
}

#[test]
fn language_codes() {
    assert_eq!(detect_direction_from_language("ar-EG"), Direction::Rtl);
    assert_eq!(detect_direction_from_language("en-US"), Direction::Ltr);
    assert_eq!(detect_direction_from_language("ur"), Direction::Rtl);
    assert_eq!(detect_direction_from_language("ja-JP"), Direction::Ltr);
}

#[test]
fn physical_names_for_stylesheets() {
    assert_eq!(PhysicalProperty::MarginRight.css_name(), "margin-right");
    assert_eq!(PhysicalProperty::TextAlign.css_name(), "text-align");
}

#[test]
fn direction_blocks_cover_both_directions() {
    let css = generate_direction_blocks();
    assert_eq!(css.matches("[dir=").count(), 2);
    assert!(css.contains("--text-align-start: right;"));
}
