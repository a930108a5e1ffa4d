//! Config normalization
//!
//! Turns a [`RawConfig`] into a [`ResolvedConfig`]: every field defaulted,
//! every enumerated option validated against its closed set and every `auto`
//! color replaced by a concrete palette entry. Normalization never fails;
//! malformed fields fall back to their defaults and are logged at debug level.

use gauge_types::{
    ActionConfig, Bound, ClosedSet, CssColor, ResolvedConfig, ResolvedEntity, SeverityLevel,
    TextStyle,
};
use hashbrown::HashSet;
use serde_json::{Map, Value};
use tracing::debug;

use crate::color::{PALETTE, color_key, palette_color};
use crate::options::{validate_array, validated_option, validated_value};
use crate::theme::ThemeLookup;

use super::defaults;
use super::duration::parse_duration;
use super::raw::RawConfig;

// ─────────────────────────────────────────────────────────────────────────────
// Gauge Config
// ─────────────────────────────────────────────────────────────────────────────

/// Apply defaults and validation to a whole card config.
pub fn normalize(raw: &RawConfig, theme: &dyn ThemeLookup) -> ResolvedConfig {
    let entity = raw.string("entity");

    let entities = raw
        .array("entities")
        .map(|list| normalize_entities(list, theme))
        .unwrap_or_default();

    let untracked_legend = raw
        .truthy("untracked_legend")
        .unwrap_or(!entities.is_empty());

    let severity_levels = raw
        .array("severity_levels")
        .map(|list| normalize_severity_levels(list, theme));

    let max = parse_bound(raw.get("max")).or_else(|| entity.clone().map(Bound::Entity));

    ResolvedConfig {
        attribute: raw.string("attribute"),

        // Title
        title: raw.string("title"),
        subtitle: raw.string("subtitle"),
        header: raw.string("header"),
        title_position: enum_field(raw, "title_position", defaults::TITLE_POSITION),
        title_text_size: raw.number("title_text_size").unwrap_or(defaults::TITLE_TEXT_SIZE),
        title_text_style: text_styles(raw, "title_text_style"),
        title_text_color: color_field(raw, "title_text_color", defaults::title_text_color()),
        subtitle_text_color: color_field(raw, "subtitle_text_color", defaults::subtitle_text_color()),

        // Min / Max
        min: parse_bound(raw.get("min")).unwrap_or(Bound::Value(defaults::MIN)),
        max,

        // Value
        precision: precision_field(raw).unwrap_or(defaults::PRECISION),
        unit: raw.string("unit"),
        cutoff: raw.number("cutoff").unwrap_or(defaults::CUTOFF),
        offset: offset_field(raw),
        sorting: option_field(raw, "sorting"),
        position: enum_field(raw, "position", defaults::POSITION),
        text_size: raw.number("text_size").unwrap_or(defaults::TEXT_SIZE),
        text_style: text_styles(raw, "text_style"),
        text_color: color_field(raw, "text_color", defaults::text_color()),

        // Styling
        line_height: raw.number("line_height").unwrap_or(defaults::LINE_HEIGHT),
        corner: enum_field(raw, "corner", defaults::CORNER),
        state_content_separator: raw
            .string("state_content_separator")
            .unwrap_or_else(|| defaults::STATE_CONTENT_SEPARATOR.to_string()),
        line_separator: raw.bool("line_separator").unwrap_or(false),
        line_separator_width: enum_field(raw, "line_separator_width", defaults::LINE_SEPARATOR_WIDTH),
        line_separator_color: color_field(raw, "line_separator_color", defaults::line_separator_color()),
        color: color_field(raw, "color", defaults::color()),
        color_bg: color_field(raw, "color_bg", defaults::color_bg()),

        // Line text
        line_text_position: enum_field(raw, "line_text_position", defaults::LINE_TEXT_POSITION),
        line_text_size: raw.number("line_text_size").unwrap_or(defaults::LINE_TEXT_SIZE),
        line_text_style: text_styles(raw, "line_text_style"),
        line_text_color: validate_color(raw.get("line_text_color"), None),
        line_text_overflow: enum_field(raw, "line_text_overflow", defaults::LINE_TEXT_OVERFLOW),
        overflow_direction: enum_field(raw, "overflow_direction", defaults::OVERFLOW_DIRECTION),

        // Actions
        tap_action: action_field(raw, "tap_action"),
        hold_action: action_field(raw, "hold_action"),
        double_tap_action: action_field(raw, "double_tap_action"),

        // Legend
        legend_hide: raw.bool("legend_hide").unwrap_or(false),
        legend_all: raw.bool("legend_all").unwrap_or(false),
        legend_position: enum_field(raw, "legend_position", defaults::LEGEND_POSITION),
        legend_alignment: enum_field(raw, "legend_alignment", defaults::LEGEND_ALIGNMENT),
        legend_indicator: enum_field(raw, "legend_indicator", defaults::LEGEND_INDICATOR),
        legend_text_size: raw.number("legend_text_size").unwrap_or(defaults::LEGEND_TEXT_SIZE),
        legend_text_style: text_styles(raw, "legend_text_style"),
        legend_text_color: color_field(raw, "legend_text_color", defaults::legend_text_color()),

        // Delta
        show_delta: raw.bool("show_delta").unwrap_or(false),
        delta_position: enum_field(raw, "delta_position", defaults::DELTA_POSITION),

        // Untracked legend
        untracked_legend,
        untracked_legend_label: raw.string("untracked_legend_label"),
        untracked_legend_icon: raw.string("untracked_legend_icon"),
        untracked_legend_indicator: enum_field(
            raw,
            "untracked_legend_indicator",
            defaults::UNTRACKED_LEGEND_INDICATOR,
        ),
        untracked_state_content: validate_array(raw.get("untracked_state_content"))
            .unwrap_or_else(|| defaults::UNTRACKED_STATE_CONTENT.to_vec()),
        untracked_line_state_content: validate_array(raw.get("untracked_line_state_content")),

        suppress_warnings: raw.bool("suppress_warnings").unwrap_or(false),

        // Statistics
        statistics: raw.bool("statistics").unwrap_or(false),
        statistics_day_offset: raw
            .unsigned("statistics_day_offset")
            .unwrap_or(defaults::STATISTICS_DAY_OFFSET),
        statistics_period: enum_field(raw, "statistics_period", defaults::STATISTICS_PERIOD),
        statistics_function: enum_field(raw, "statistics_function", defaults::STATISTICS_FUNCTION),

        // Severity
        severity: raw.bool("severity").unwrap_or(false),
        severity_levels,
        severity_blend: raw.bool("severity_blend").unwrap_or(false),

        entity,
        entities,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

/// Normalize the child entity list.
///
/// Entries without a usable id are dropped first, so they never take a
/// palette slot. Explicit colors of the survivors are reserved next, then
/// every `auto` entity takes the first palette color nobody uses.
pub fn normalize_entities(raw: &[Value], theme: &dyn ThemeLookup) -> Vec<ResolvedEntity> {
    let entries: Vec<(String, RawConfig)> = raw
        .iter()
        .filter_map(|value| {
            let entry = entity_entry(value);
            match valid_entity_id(&entry) {
                Some(id) => Some((id, entry)),
                None => {
                    debug!(entry = %value, "Dropping entity entry without a usable id");
                    None
                }
            }
        })
        .collect();

    let explicit: Vec<Option<CssColor>> = entries
        .iter()
        .map(|(_, entry)| validate_color(entry.get("color"), None))
        .collect();

    let mut assigner = ColorAssigner::new(explicit.iter().flatten(), theme);

    entries
        .into_iter()
        .zip(explicit)
        .map(|((entity, entry), color)| {
            let color = color.unwrap_or_else(|| assigner.next());
            resolve_entity(entity, &entry, color)
        })
        .collect()
}

/// A bare string is shorthand for `{ entity: <string> }`
fn entity_entry(value: &Value) -> RawConfig {
    match value {
        Value::String(id) => {
            let mut map = Map::new();
            map.insert("entity".to_string(), Value::String(id.clone()));
            RawConfig::new(map)
        }
        other => RawConfig::from_value(other.clone()),
    }
}

fn valid_entity_id(entry: &RawConfig) -> Option<String> {
    let id = entry.str("entity")?;
    if id.is_empty() || defaults::PLACEHOLDER_ENTITY_IDS.contains(&id) {
        return None;
    }
    Some(id.to_string())
}

fn resolve_entity(entity: String, entry: &RawConfig, color: CssColor) -> ResolvedEntity {
    ResolvedEntity {
        attribute: entry.string("attribute"),
        name: entry.string("name"),
        icon: entry.string("icon"),
        color,

        cutoff: entry.number("cutoff"),
        unit: entry.string("unit"),
        multiplier: entry.number("multiplier").unwrap_or(defaults::ENTITY_MULTIPLIER),
        precision: precision_field(entry),

        state_content: validate_array(entry.get("state_content"))
            .unwrap_or_else(|| defaults::ENTITY_STATE_CONTENT.to_vec()),
        line_state_content: validate_array(entry.get("line_state_content")),

        legend_indicator: option_field(entry, "legend_indicator"),
        legend_text_color: validate_color(entry.get("legend_text_color"), None),
        line_text_color: validate_color(entry.get("line_text_color"), None),

        tap_action: action_field(entry, "tap_action"),
        hold_action: action_field(entry, "hold_action"),
        double_tap_action: action_field(entry, "double_tap_action"),

        entity,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Severity Levels
// ─────────────────────────────────────────────────────────────────────────────

/// Normalize severity levels and sort them by `from`, highest first.
///
/// Colors are assigned like entity colors. A color that is present but not
/// a color value at all falls back to the primary color.
pub fn normalize_severity_levels(raw: &[Value], theme: &dyn ThemeLookup) -> Vec<SeverityLevel> {
    let entries: Vec<RawConfig> = raw.iter().cloned().map(RawConfig::from_value).collect();

    let explicit: Vec<ColorChoice> = entries
        .iter()
        .map(|entry| ColorChoice::of(entry.get("color")))
        .collect();

    let mut assigner = ColorAssigner::new(
        explicit.iter().filter_map(|choice| match choice {
            ColorChoice::Explicit(color) => Some(color),
            _ => None,
        }),
        theme,
    );

    let mut levels: Vec<SeverityLevel> = entries
        .iter()
        .zip(explicit)
        .map(|(entry, choice)| SeverityLevel {
            from: entry.number("from").unwrap_or(0.0),
            color: match choice {
                ColorChoice::Explicit(color) => color,
                ColorChoice::Auto => assigner.next(),
                ColorChoice::Invalid => {
                    debug!(level = ?entry.as_map(), "Severity level color is not a color, using primary");
                    defaults::color()
                }
            },
        })
        .collect();

    levels.sort_by(|a, b| b.from.total_cmp(&a.from));
    levels
}

enum ColorChoice {
    Explicit(CssColor),
    Auto,
    Invalid,
}

impl ColorChoice {
    fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Auto,
            Some(Value::String(s)) if s.is_empty() || s == "auto" => Self::Auto,
            Some(v) => validate_color(Some(v), None).map_or(Self::Invalid, Self::Explicit),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette Assignment
// ─────────────────────────────────────────────────────────────────────────────

/// Hands out palette colors not yet used by any explicit color
struct ColorAssigner {
    used: HashSet<String>,
    assigned: usize,
}

impl ColorAssigner {
    fn new<'a>(explicit: impl Iterator<Item = &'a CssColor>, theme: &dyn ThemeLookup) -> Self {
        Self {
            used: explicit.map(|color| color_key(color, theme)).collect(),
            assigned: 0,
        }
    }

    fn next(&mut self) -> CssColor {
        let color = PALETTE
            .iter()
            .copied()
            .find(|candidate| !self.used.contains(*candidate))
            .unwrap_or_else(|| palette_color(self.assigned));

        self.used.insert(color.to_string());
        self.assigned += 1;
        CssColor::from(color)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Color as written, or `default` for absent / empty / `auto` values.
///
/// Numeric arrays become `rgba(r,g,b[,a])`; any other string passes through
/// unchanged since it may be a theme variable or a keyword.
pub fn validate_color(value: Option<&Value>, default: Option<CssColor>) -> Option<CssColor> {
    match value {
        Some(Value::String(s)) if !s.is_empty() && s != "auto" => Some(CssColor::new(s.clone())),
        Some(Value::Array(items)) if !items.is_empty() && items.iter().all(Value::is_number) => {
            let channels: Vec<String> = items.iter().map(Value::to_string).collect();
            Some(CssColor::new(format!("rgba({})", channels.join(","))))
        }
        _ => default,
    }
}

fn color_field(raw: &RawConfig, key: &str, default: CssColor) -> CssColor {
    validate_color(raw.get(key), None).unwrap_or(default)
}

fn enum_field<T: ClosedSet>(raw: &RawConfig, key: &str, fallback: T) -> T {
    let value = raw.get(key);
    let resolved = validated_option::<T>(value);
    if resolved.is_none() && value.is_some() {
        debug!(key, value = ?value, fallback = fallback.as_str(), "Invalid option, using default");
    }
    validated_value(value, fallback)
}

fn option_field<T: ClosedSet>(raw: &RawConfig, key: &str) -> Option<T> {
    let value = raw.get(key);
    let resolved = validated_option(value);
    if resolved.is_none() && value.is_some() {
        debug!(key, value = ?value, "Invalid option, ignoring");
    }
    resolved
}

fn precision_field(raw: &RawConfig) -> Option<u32> {
    let precision = raw.unsigned("precision")?;
    if precision > defaults::MAX_PRECISION {
        debug!(precision, max = defaults::MAX_PRECISION, "Precision out of range, ignoring");
        return None;
    }
    Some(precision)
}

fn text_styles(raw: &RawConfig, key: &str) -> Option<Vec<TextStyle>> {
    validate_array(raw.get(key))
}

fn offset_field(raw: &RawConfig) -> Option<u64> {
    let value = raw.get("offset")?;
    let offset = parse_duration(value);
    if offset.is_none() {
        debug!(value = %value, "Offset is not a duration like '30s' or '2h', ignoring");
    }
    offset
}

fn action_field(raw: &RawConfig, key: &str) -> Option<ActionConfig> {
    let value = raw.get(key)?;
    match serde_json::from_value::<ActionConfig>(value.clone()) {
        Ok(action) => Some(action),
        Err(err) => {
            debug!(key, error = %err, "Malformed action binding, ignoring");
            None
        }
    }
}

/// Numbers and numeric strings are fixed bounds; other strings are entity ids
fn parse_bound(value: Option<&Value>) -> Option<Bound> {
    match value? {
        Value::Number(n) => n.as_f64().map(Bound::Value),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(Bound::Value(v)),
                _ => Some(Bound::Entity(s.to_string())),
            }
        }
        _ => None,
    }
}
