// File: crates/vna-chart-core/tests/theme.rs
// Purpose: Built-in theme presets, lookup by name and marker color cycling.

use vna_chart_core::theme::{self, Rgba, Theme};
use vna_chart_core::{Chart, ChartKind};

#[test]
fn presets_are_light_then_dark() {
    let names: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["light", "dark"]);
    assert_eq!(Theme::default(), Theme::light());
}

#[test]
fn find_ignores_case_and_falls_back_to_light() {
    assert_eq!(theme::find("dark"), Theme::dark());
    assert_eq!(theme::find("DARK"), Theme::dark());
    assert_eq!(theme::find("Light"), Theme::light());
    assert_eq!(theme::find("solarized"), Theme::light());
    assert_eq!(theme::find(""), Theme::light());
}

#[test]
fn marker_colors_cycle() {
    let t = Theme::light();
    assert_eq!(t.marker_color(1), Rgba::rgb(255, 0, 0));
    assert_eq!(t.marker_color(3), Rgba::rgb(0, 0, 128));
    assert_eq!(t.marker_color(4), t.marker_color(1));
    assert_eq!(t.marker_color(0), t.marker_color(1));
}

#[test]
fn chart_takes_marker_colors_from_its_theme() {
    let mut chart = Chart::new(ChartKind::Smith, "S11 Smith Chart");
    chart.config.theme = theme::find("dark");
    let color = chart.add_marker().color;
    assert_eq!(color, Theme::dark().marker_color(1));
    assert_eq!(chart.frame(290.0, 290.0).theme, Theme::dark());
}
