//! Tests for config normalization
//!
//! Covers defaults, option validation, color assignment and severity ordering.

use gauge_types::{
    ActionKind, Bound, Corner, CssColor, Indicator, LegendAlignment, Position, Sorting,
    StateContent, TextStyle, UntrackedStateContent, ValuePosition,
};
use serde_json::{Value, json};

use super::{RawConfig, normalize, normalize_entities, normalize_severity_levels, validate_color};
use crate::color::PALETTE;
use crate::theme::{NoTheme, ThemeVariables};

fn resolve(value: Value) -> gauge_types::ResolvedConfig {
    normalize(&RawConfig::from_value(value), &NoTheme)
}

fn list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => panic!("expected array, got {other}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gauge defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn minimal_config_gets_defaults() {
    let config = resolve(json!({ "entity": "sensor.power" }));

    assert_eq!(config.entity.as_deref(), Some("sensor.power"));
    assert_eq!(config.title_position, Position::TopLeft);
    assert_eq!(config.title_text_size, 2.0);
    assert_eq!(config.title_text_color.as_str(), "var(--primary-text-color)");
    assert_eq!(config.subtitle_text_color.as_str(), "var(--secondary-text-color)");
    assert_eq!(config.min, Bound::Value(0.0));
    assert_eq!(config.max, Some(Bound::Entity("sensor.power".to_string())));
    assert_eq!(config.precision, 0);
    assert_eq!(config.cutoff, 0.0);
    assert_eq!(config.offset, None);
    assert_eq!(config.sorting, None);
    assert_eq!(config.position, ValuePosition::Left);
    assert_eq!(config.text_size, 2.5);
    assert_eq!(config.line_height, 3.0);
    assert_eq!(config.corner, Corner::Square);
    assert_eq!(config.state_content_separator, " \u{2E31} ");
    assert_eq!(config.color.as_str(), "var(--primary-color)");
    assert_eq!(config.color_bg.as_str(), "var(--secondary-background-color)");
    assert_eq!(config.line_separator_color.as_str(), "var(--card-background-color)");
    assert_eq!(config.line_text_color, None);
    assert_eq!(config.legend_position, Position::BottomCenter);
    assert_eq!(config.legend_alignment, LegendAlignment::Center);
    assert_eq!(config.legend_indicator, Indicator::IconFallback);
    assert_eq!(config.legend_text_color.as_str(), "var(--secondary-text-color)");
    assert_eq!(config.delta_position, Position::BottomCenter);
    assert_eq!(config.untracked_state_content, vec![UntrackedStateContent::Name]);
    assert_eq!(config.statistics_day_offset, 1);
    assert!(!config.untracked_legend);
    assert!(config.entities.is_empty());
    assert_eq!(config.severity_levels, None);
}

#[test]
fn invalid_options_fall_back() {
    let config = resolve(json!({
        "entity": "sensor.power",
        "corner": "wavy",
        "title_position": "top-middle",
        "position": "in-title-right",
        "legend_alignment": 42,
        "sorting": "random",
    }));

    assert_eq!(config.corner, Corner::Square);
    assert_eq!(config.title_position, Position::TopMiddle);
    assert_eq!(config.position, ValuePosition::InTitleRight);
    assert_eq!(config.legend_alignment, LegendAlignment::Center);
    assert_eq!(config.sorting, None);
}

#[test]
fn explicit_max_and_numeric_strings() {
    let config = resolve(json!({ "entity": "sensor.power", "min": "10", "max": "sensor.limit" }));
    assert_eq!(config.min, Bound::Value(10.0));
    assert_eq!(config.max, Some(Bound::Entity("sensor.limit".to_string())));

    let config = resolve(json!({ "entity": "sensor.power", "max": 3000 }));
    assert_eq!(config.max, Some(Bound::Value(3000.0)));
}

#[test]
fn british_aliases_resolve() {
    let config = resolve(json!({
        "colour": "red",
        "colour_bg": "#111",
        "line_text_colour": "white",
        "text_color": "blue",
        "text_colour": "green",
    }));

    assert_eq!(config.color.as_str(), "red");
    assert_eq!(config.color_bg.as_str(), "#111");
    assert_eq!(config.line_text_color, Some(CssColor::from("white")));
    assert_eq!(config.text_color.as_str(), "blue");
}

#[test]
fn auto_and_array_colors() {
    let config = resolve(json!({ "color": "auto", "color_bg": [10, 20, 30, 0.5] }));
    assert_eq!(config.color.as_str(), "var(--primary-color)");
    assert_eq!(config.color_bg.as_str(), "rgba(10,20,30,0.5)");
}

#[test]
fn validate_color_rules() {
    let default = Some(CssColor::from("black"));
    assert_eq!(validate_color(None, default.clone()), default);
    assert_eq!(validate_color(Some(&json!("")), default.clone()), default);
    assert_eq!(validate_color(Some(&json!("auto")), None), None);
    assert_eq!(validate_color(Some(&json!([1, 2, 3])), None), Some(CssColor::from("rgba(1,2,3)")));
    assert_eq!(validate_color(Some(&json!("var(--x)")), None), Some(CssColor::from("var(--x)")));
    assert_eq!(validate_color(Some(&json!(12)), default.clone()), default);
}

#[test]
fn offset_and_text_styles() {
    let config = resolve(json!({
        "offset": "2h",
        "title_text_style": ["weight-bold", "sparkly", "style-italic"],
    }));
    assert_eq!(config.offset, Some(7_200_000));
    assert_eq!(
        config.title_text_style,
        Some(vec![TextStyle::WeightBold, TextStyle::StyleItalic])
    );

    assert_eq!(resolve(json!({ "offset": 10 })).offset, None);
    assert_eq!(resolve(json!({ "offset": "5x" })).offset, None);
}

#[test]
fn actions_are_carried_when_well_formed() {
    let config = resolve(json!({
        "tap_action": { "action": "navigate", "navigation_path": "/energy" },
        "hold_action": { "action": "explode" },
        "double_tap_action": "more-info",
    }));

    let tap = config.tap_action.expect("tap action");
    assert_eq!(tap.action, ActionKind::Navigate);
    assert_eq!(tap.navigation_path.as_deref(), Some("/energy"));
    assert_eq!(config.hold_action, None);
    assert_eq!(config.double_tap_action, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Untracked legend
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn untracked_legend_follows_entities() {
    let config = resolve(json!({ "entities": ["sensor.plug"] }));
    assert!(config.untracked_legend);

    let config = resolve(json!({ "entities": [] }));
    assert!(!config.untracked_legend);
}

#[test]
fn untracked_legend_explicit_false_wins() {
    let config = resolve(json!({ "entities": ["sensor.plug"], "untracked_legend": false }));
    assert!(!config.untracked_legend);

    let config = resolve(json!({ "untracked_legend": true }));
    assert!(config.untracked_legend);
}

#[test]
fn untracked_legend_coerces_truthy_values() {
    assert!(resolve(json!({ "untracked_legend": "yes" })).untracked_legend);
    assert!(resolve(json!({ "untracked_legend": 1 })).untracked_legend);
    assert!(!resolve(json!({ "entities": ["sensor.plug"], "untracked_legend": 0 })).untracked_legend);
    assert!(!resolve(json!({ "entities": ["sensor.plug"], "untracked_legend": "" })).untracked_legend);
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_entity_ids_are_dropped() {
    let raw = list(json!([
        { "entity": "sensor.a" },
        { "entity": "" },
        { "entity": "none" },
        { "entity": "null" },
        { "entity": "undefined" },
        { "entity": 5 },
        { "name": "no id" },
        42,
        "sensor.b",
    ]));

    let entities = normalize_entities(&raw, &NoTheme);
    let ids: Vec<&str> = entities.iter().map(|e| e.entity.as_str()).collect();
    assert_eq!(ids, ["sensor.a", "sensor.b"]);
}

#[test]
fn auto_colors_skip_explicit_ones() {
    let raw = list(json!([
        { "entity": "sensor.a" },
        { "entity": "sensor.b", "color": "#4269d0" },
        { "entity": "sensor.c", "color": "auto" },
    ]));

    let entities = normalize_entities(&raw, &NoTheme);
    assert_eq!(entities[0].color.as_str(), PALETTE[1]);
    assert_eq!(entities[1].color.as_str(), "#4269d0");
    assert_eq!(entities[2].color.as_str(), PALETTE[2]);
}

#[test]
fn explicit_theme_colors_reserve_their_hex() {
    let mut theme = ThemeVariables::new();
    theme.insert("plug-color", PALETTE[0]);

    let raw = list(json!([
        { "entity": "sensor.a", "colour": "var(--plug-color)" },
        { "entity": "sensor.b" },
    ]));

    let entities = normalize_entities(&raw, &theme);
    assert_eq!(entities[0].color.as_str(), "var(--plug-color)");
    assert_eq!(entities[1].color.as_str(), PALETTE[1]);
}

#[test]
fn dropped_entities_do_not_consume_palette_slots() {
    let raw = list(json!([{ "entity": "none" }, { "entity": "sensor.a" }]));
    let entities = normalize_entities(&raw, &NoTheme);
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].color.as_str(), PALETTE[0]);
}

#[test]
fn palette_exhaustion_wraps_around() {
    let raw: Vec<Value> = (0..PALETTE.len() + 2)
        .map(|i| json!({ "entity": format!("sensor.e{i}") }))
        .collect();

    let entities = normalize_entities(&raw, &NoTheme);
    assert_eq!(entities.len(), PALETTE.len() + 2);
    assert_eq!(entities[PALETTE.len() - 1].color.as_str(), PALETTE[PALETTE.len() - 1]);
    assert_eq!(entities[PALETTE.len()].color.as_str(), PALETTE[0]);
    assert_eq!(entities[PALETTE.len() + 1].color.as_str(), PALETTE[1]);
    assert!(entities.iter().all(|e| e.color.as_str() != "auto"));
}

#[test]
fn entity_defaults_and_fields() {
    let raw = list(json!([
        {
            "entity": "sensor.a",
            "name": "Plug",
            "multiplier": 0.001,
            "precision": 2,
            "cutoff": 5,
            "state_content": ["state", "bogus", "percentage"],
            "legend_indicator": "circle",
            "legend_text_colour": "red",
        },
        { "entity": "sensor.b", "legend_indicator": "sparkle" },
    ]));

    let entities = normalize_entities(&raw, &NoTheme);
    let a = &entities[0];
    assert_eq!(a.display_name(), "Plug");
    assert_eq!(a.multiplier, 0.001);
    assert_eq!(a.precision, Some(2));
    assert_eq!(a.cutoff, Some(5.0));
    assert_eq!(a.state_content, vec![StateContent::State, StateContent::Percentage]);
    assert_eq!(a.legend_indicator, Some(Indicator::Circle));
    assert_eq!(a.legend_text_color, Some(CssColor::from("red")));

    let b = &entities[1];
    assert_eq!(b.multiplier, 1.0);
    assert_eq!(b.state_content, vec![StateContent::Name]);
    assert_eq!(b.legend_indicator, None);
    assert_eq!(b.cutoff, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Severity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn severity_levels_sorted_descending() {
    let raw = list(json!([
        { "from": 10, "color": "green" },
        { "from": 100, "color": "red" },
        { "color": "blue" },
        { "from": 50, "color": "orange" },
    ]));

    let levels = normalize_severity_levels(&raw, &NoTheme);
    let froms: Vec<f64> = levels.iter().map(|l| l.from).collect();
    assert_eq!(froms, [100.0, 50.0, 10.0, 0.0]);
    assert_eq!(levels[3].color.as_str(), "blue");
}

#[test]
fn severity_sort_is_stable() {
    let raw = list(json!([
        { "from": 10, "color": "green" },
        { "from": 10, "color": "red" },
    ]));
    let levels = normalize_severity_levels(&raw, &NoTheme);
    assert_eq!(levels[0].color.as_str(), "green");
    assert_eq!(levels[1].color.as_str(), "red");
}

#[test]
fn severity_auto_and_invalid_colors() {
    let raw = list(json!([
        { "from": 0 },
        { "from": 10, "color": "#4269D0" },
        { "from": 20, "color": 7 },
    ]));

    let levels = normalize_severity_levels(&raw, &NoTheme);
    assert_eq!(levels[0].color.as_str(), "var(--primary-color)");
    assert_eq!(levels[1].color.as_str(), "#4269D0");
    assert_eq!(levels[2].color.as_str(), PALETTE[1]);
}

#[test]
fn severity_levels_only_from_arrays() {
    assert_eq!(resolve(json!({ "severity_levels": "red" })).severity_levels, None);
    let config = resolve(json!({ "severity": true, "severity_levels": [{ "from": 1, "color": "red" }] }));
    assert_eq!(config.active_severity_levels().map(<[_]>::len), Some(1));
}

#[test]
fn sorting_option_is_kept() {
    let config = resolve(json!({ "sorting": "value-desc" }));
    assert_eq!(config.sorting, Some(Sorting::ValueDesc));
}

#[test]
fn out_of_range_precision_uses_default() {
    let config = resolve(json!({
        "precision": 70000,
        "entities": [
            { "entity": "sensor.a", "precision": 50_000_000 },
            { "entity": "sensor.b", "precision": 100 },
        ],
    }));
    assert_eq!(config.precision, 0);
    assert_eq!(config.entities[0].precision, None);
    assert_eq!(config.entities[1].precision, Some(100));

    assert_eq!(resolve(json!({ "precision": 100 })).precision, 100);
}
