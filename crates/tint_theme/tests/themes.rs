use pretty_assertions::assert_eq;
use tint_theme::{
    create_theme, derive, flatten, get_theme_color, BrightnessMode, Color, ColorFamily,
    Direction, GroupPatch, Shade, StatusPatch, Theme, ThemeConfig, ThemeOverrides,
};

fn every_config() -> Vec<ThemeConfig> {
    let mut configs = Vec::new();
    for family in ColorFamily::all() {
        for mode in BrightnessMode::all() {
            for direction in Direction::all() {
                configs.push(
                    ThemeConfig::new()
                        .with_family(*family)
                        .with_mode(*mode)
                        .with_direction(*direction),
                );
            }
        }
    }
    configs
}

#[test]
fn every_family_and_mode_populates_every_role() {
    for family in ColorFamily::all() {
        for mode in BrightnessMode::all() {
            let theme = create_theme(&ThemeConfig::new().with_family(*family).with_mode(*mode));
            let roles: Vec<(String, String)> = theme
                .leaves()
                .into_iter()
                .filter(|(path, _)| path.starts_with("colors.semantic."))
                .collect();

            assert_eq!(roles.len(), 36, "{family} {mode}");
            for (path, value) in roles {
                assert!(
                    value.parse::<Color>().is_ok(),
                    "{family} {mode}: {path} = {value:?}"
                );
            }
        }
    }
}

#[test]
fn flatten_is_idempotent_and_ordered() {
    for config in every_config() {
        let first: Vec<(String, String)> = flatten(&create_theme(&config))
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let second: Vec<(String, String)> = flatten(&create_theme(&config.clone()))
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(first, second);
    }
}

#[test]
fn every_leaf_path_round_trips_through_lookup() {
    let theme = create_theme(
        &ThemeConfig::new()
            .with_family(ColorFamily::Orange)
            .with_mode(BrightnessMode::Dark),
    );

    for (path, value) in theme.leaves() {
        assert_eq!(get_theme_color(&theme, &path), value, "{path}");
    }

    assert_eq!(get_theme_color(&theme, "mode"), theme.mode.to_string());
    assert_eq!(
        get_theme_color(&theme, "colorFamily"),
        theme.color_family.to_string()
    );
    assert_eq!(
        get_theme_color(&theme, "direction"),
        theme.direction.to_string()
    );

    assert_eq!(
        get_theme_color(&theme, "colors.semantic.action.hover"),
        theme.colors.semantic.action.hover.to_string()
    );
    assert_eq!(
        get_theme_color(&theme, "colors.raw.orange.950"),
        theme.colors.raw.orange.get(Shade::S950).to_string()
    );
    assert_eq!(
        get_theme_color(&theme, "typography.fontWeight.semibold"),
        theme.typography.font_weight.semibold.to_string()
    );
    assert_eq!(
        get_theme_color(&theme, "zIndex.modal"),
        theme.z_index.modal.to_string()
    );
}

#[test]
fn status_override_leaves_siblings_derived() {
    let theme = create_theme(
        &ThemeConfig::new()
            .with_family(ColorFamily::Blue)
            .with_overrides(ThemeOverrides {
                semantic: tint_theme::SemanticPatch {
                    status: Some(GroupPatch::Merge(StatusPatch {
                        error: Some("#111111".parse().unwrap()),
                        ..Default::default()
                    })),
                    ..Default::default()
                },
                ..Default::default()
            }),
    );

    let derived = derive(BrightnessMode::Light, ColorFamily::Blue);
    assert_eq!(theme.colors.semantic.status.error.to_string(), "#111111");
    assert_eq!(theme.colors.semantic.status.warning, derived.status.warning);
    assert_eq!(theme.colors.semantic.text, derived.text);
}

#[test]
fn green_black_rtl_end_to_end() {
    let theme = create_theme(
        &ThemeConfig::from_names(Some("green"), Some("black"), Some("rtl")).unwrap(),
    );
    assert_eq!(
        theme.colors.semantic.background.primary.to_string(),
        "#000000"
    );

    let vars = flatten(&theme);
    assert_eq!(vars.get("--direction"), Some("rtl"));
    assert_eq!(vars.get("--color-family"), Some("green"));
    assert_eq!(vars.get("--mode"), Some("black"));
}

#[test]
fn direction_does_not_affect_colors() {
    for family in ColorFamily::all() {
        for mode in BrightnessMode::all() {
            let base = ThemeConfig::new().with_family(*family).with_mode(*mode);
            let ltr = create_theme(&base.clone().with_direction(Direction::Ltr));
            let rtl = create_theme(&base.with_direction(Direction::Rtl));
            assert_eq!(ltr.colors, rtl.colors, "{family} {mode}");
        }
    }
}

#[test]
fn raw_overrides_do_not_leak_into_later_themes() {
    let overrides: ThemeOverrides = toml::from_str(
        r##"
        [raw.blue]
        "50" = "#ffffff"
        "##,
    )
    .unwrap();

    let patched = create_theme(&ThemeConfig::new().with_overrides(overrides));
    assert_eq!(patched.colors.raw.blue.get(Shade::S50), Color::WHITE);
    assert_eq!(
        patched.colors.raw.blue.get(Shade::S100),
        Theme::default().colors.raw.blue.get(Shade::S100)
    );

    let fresh = Theme::default();
    assert_eq!(fresh.colors.raw.blue.get(Shade::S50).to_string(), "#eff6ff");
}

#[test]
fn equal_configs_give_equal_themes() {
    let config = ThemeConfig::from_toml_str(
        r##"
        family = "pink"
        mode = "dark"

        [overrides.semantic]
        shadow = "#00000033"
        "##,
    )
    .unwrap();

    assert_eq!(create_theme(&config), create_theme(&config.clone()));
    assert_eq!(
        create_theme(&config).colors.semantic.shadow.large.to_string(),
        "#00000033"
    );
}
