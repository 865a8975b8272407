// File: crates/interval-core/tests/config.rs
// Purpose: TOML config parsing, theme resolution and color overrides.

use interval_core::{ChartConfig, ChartError, Color, RenderOptions, Theme};

#[test]
fn empty_config_yields_defaults() {
    let cfg = ChartConfig::from_toml_str("").unwrap();
    let opts = cfg.to_render_options().unwrap();
    let d = RenderOptions::default();
    assert_eq!((opts.width, opts.height, opts.offset), (d.width, d.height, d.offset));
    assert_eq!(opts.theme, Theme::classic());
    assert!(!opts.draw_labels);
}

#[test]
fn full_config_applies() {
    let cfg = ChartConfig::from_toml_str(
        r##"
width = 1024
height = 480
offset = 40
theme = "Dark"
draw_labels = true

[colors]
bar = "#336699"
bound = "#fff"
background = "#00000080"
"##,
    )
    .unwrap();
    let opts = cfg.to_render_options().unwrap();
    assert_eq!((opts.width, opts.height, opts.offset), (1024, 480, 40));
    assert!(opts.draw_labels);
    assert_eq!(opts.theme.name, "dark");
    assert_eq!(opts.theme.bar, Color::from_rgb(0x33, 0x66, 0x99));
    assert_eq!(opts.theme.bound, Color::from_rgb(255, 255, 255));
    assert_eq!(opts.theme.background, Color::from_argb(0x80, 0, 0, 0));
    assert_eq!(opts.theme.marker, Theme::dark().marker);
}

#[test]
fn unknown_theme_falls_back_to_classic() {
    let cfg = ChartConfig::from_toml_str(r#"theme = "neon""#).unwrap();
    assert_eq!(cfg.theme().unwrap(), Theme::classic());
}

#[test]
fn bad_color_and_unknown_keys_are_errors() {
    let cfg = ChartConfig::from_toml_str("[colors]\nbar = \"#12\"\n").unwrap();
    assert!(matches!(cfg.to_render_options(), Err(ChartError::InvalidColor(_))));
    assert!(matches!(ChartConfig::from_toml_str("colour = 1"), Err(ChartError::Config(_))));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.toml");
    std::fs::write(&path, "offset = 10\n").unwrap();
    let cfg = ChartConfig::load(&path).unwrap();
    assert_eq!(cfg.offset, Some(10));
}
