//! Render plan
//!
//! Resolves a normalized config against live states into everything a
//! presenter needs: bar widths, colors, visibility, text and the delta.
//!
//! ```text
//!   ResolvedConfig + StateSnapshot + ThemeLookup (+ StatisticsProvider)
//!       │
//!       ├─► main bar      (width, severity color, value text)
//!       ├─► entity bars   (cutoff, width, percentage, sorted)
//!       ├─► untracked     (main minus visible entities)
//!       └─► delta         (current vs statistic)
//! ```

use chrono::{DateTime, Utc};
use gauge_types::{
    CssColor, Position, ResolvedConfig, ResolvedEntity, Sorting, StateContent,
    UntrackedStateContent,
};
use serde::Serialize;

use crate::color::get_text_color;
use crate::theme::ThemeLookup;

use super::delta::{Delta, StatisticsProvider, StatisticsWindow, resolve_delta};
use super::format::{format_percentage, format_value, percentage};
use super::geometry::{resolve_bound, resolve_width};
use super::severity::severity_color;
use super::state::StateSnapshot;

/// Legend label of the untracked remainder when none is configured
pub const UNTRACKED_LABEL: &str = "Untracked";

// ─────────────────────────────────────────────────────────────────────────────
// Output Types
// ─────────────────────────────────────────────────────────────────────────────

/// Everything needed to draw one gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeRender {
    pub main: MainBar,
    pub entities: Vec<EntityBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untracked: Option<UntrackedBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<Delta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainBar {
    pub entity: Option<String>,
    pub value: Option<f64>,
    /// Formatted value, absent when the state is unusable
    pub text: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub width: f64,
    /// Bar color after severity
    pub color: CssColor,
    pub background: CssColor,
    pub text_color: Option<CssColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityBar {
    pub entity: String,
    pub name: String,
    pub value: Option<f64>,
    pub percentage: f64,
    pub width: f64,
    pub color: CssColor,
    pub bar_visible: bool,
    pub legend_visible: bool,
    /// Text drawn inside the bar; `None` when no line content is configured
    pub line_text: Option<String>,
    pub line_text_color: Option<CssColor>,
    pub legend_text: String,
    pub legend_text_color: CssColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UntrackedBar {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub width: f64,
    pub color: CssColor,
    pub legend_visible: bool,
    pub line_text: Option<String>,
    pub line_text_color: Option<CssColor>,
    pub legend_text: String,
}

/// External inputs of one resolution pass
pub struct RenderContext<'a> {
    pub states: &'a StateSnapshot,
    pub theme: &'a dyn ThemeLookup,
    pub statistics: Option<&'a dyn StatisticsProvider>,
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(states: &'a StateSnapshot, theme: &'a dyn ThemeLookup) -> Self {
        Self {
            states,
            theme,
            statistics: None,
            now: Utc::now(),
        }
    }

    pub fn with_statistics(mut self, provider: &'a dyn StatisticsProvider) -> Self {
        self.statistics = Some(provider);
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve `config` against the current states.
pub fn resolve_gauge(config: &ResolvedConfig, ctx: &RenderContext<'_>) -> GaugeRender {
    let main = resolve_main(config, ctx);

    let mut entities: Vec<EntityBar> = config
        .entities
        .iter()
        .map(|entity| resolve_entity(config, entity, &main, ctx))
        .collect();

    let untracked = resolve_untracked(config, &main, &entities);

    if let Some(sorting) = config.sorting {
        sort_entities(&mut entities, sorting);
    }

    let delta = resolve_main_delta(config, &main, ctx);

    GaugeRender {
        main,
        entities,
        untracked,
        delta,
    }
}

fn resolve_main(config: &ResolvedConfig, ctx: &RenderContext<'_>) -> MainBar {
    let value = config
        .entity
        .as_deref()
        .and_then(|id| ctx.states.numeric(id, config.attribute.as_deref()));

    let min = resolve_bound(&config.min, ctx.states);
    let max = config.max.as_ref().and_then(|b| resolve_bound(b, ctx.states));

    let width = match (value, min, max) {
        (Some(v), Some(min), Some(max)) => resolve_width(v, min, max),
        _ => 0.0,
    };

    let color = match (value, config.active_severity_levels()) {
        (Some(v), Some(levels)) => {
            severity_color(levels, v, &config.color, config.severity_blend, ctx.theme)
        }
        _ => config.color.clone(),
    };

    let text_color = get_text_color(
        config.line_text_color.as_ref(),
        Some(&config.text_color),
        Some(&color),
        ctx.theme,
    );

    MainBar {
        entity: config.entity.clone(),
        text: value.map(|v| format_value(v, config.precision, config.unit.as_deref())),
        value,
        min,
        max,
        width,
        color,
        background: config.color_bg.clone(),
        text_color,
    }
}

fn resolve_entity(
    config: &ResolvedConfig,
    entity: &ResolvedEntity,
    main: &MainBar,
    ctx: &RenderContext<'_>,
) -> EntityBar {
    let state = ctx.states.get(&entity.entity);
    let value = state
        .and_then(|s| s.numeric(entity.attribute.as_deref()))
        .map(|v| v * entity.multiplier);

    let cutoff = entity.cutoff.unwrap_or(config.cutoff);
    let bar_visible = value.is_some_and(|v| v >= cutoff);
    let legend_visible = !config.legend_hide && (bar_visible || config.legend_all);

    let width = match (value, main.min, main.max) {
        (Some(v), Some(min), Some(max)) if bar_visible => resolve_width(v, min, max),
        _ => 0.0,
    };
    let share = value.map_or(0.0, |v| percentage(v, main.value));

    let precision = entity.precision.unwrap_or(config.precision);
    let unit = entity.unit.as_deref().or(config.unit.as_deref());
    let content = |kind: &StateContent| -> Option<String> {
        match kind {
            StateContent::Name => Some(entity.display_name().to_string()),
            StateContent::State => value.map(|v| format_value(v, precision, unit)),
            StateContent::Percentage => Some(format_percentage(share, precision)),
            StateContent::LastChanged => state?.last_changed.map(|t| t.to_rfc3339()),
            StateContent::LastUpdated => state?.last_updated.map(|t| t.to_rfc3339()),
            StateContent::Icon => None,
        }
    };

    let separator = config.state_content_separator.as_str();
    let legend_text = join_content(entity.state_content.iter().filter_map(&content), separator);
    let line_text = entity
        .line_state_content
        .as_ref()
        .map(|kinds| join_content(kinds.iter().filter_map(&content), separator))
        .filter(|text| !text.is_empty());

    let line_text_color = get_text_color(
        entity.line_text_color.as_ref().or(config.line_text_color.as_ref()),
        Some(&config.text_color),
        Some(&entity.color),
        ctx.theme,
    );

    EntityBar {
        entity: entity.entity.clone(),
        name: entity.display_name().to_string(),
        value,
        percentage: share,
        width,
        color: entity.color.clone(),
        bar_visible,
        legend_visible,
        line_text,
        line_text_color,
        legend_text,
        legend_text_color: entity
            .legend_text_color
            .clone()
            .unwrap_or_else(|| config.legend_text_color.clone()),
    }
}

/// Whatever part of the main value the visible entities don't account for
fn resolve_untracked(
    config: &ResolvedConfig,
    main: &MainBar,
    entities: &[EntityBar],
) -> Option<UntrackedBar> {
    if config.entities.is_empty() && !config.untracked_legend {
        return None;
    }
    let main_value = main.value?;

    let visible = entities.iter().filter(|e| e.bar_visible);
    let tracked: f64 = visible.clone().filter_map(|e| e.value).sum();
    let tracked_width: f64 = visible.map(|e| e.width).sum();

    let value = (main_value - tracked).max(0.0);
    let width = (main.width - tracked_width).max(0.0);
    let share = percentage(value, Some(main_value));

    let label = config
        .untracked_legend_label
        .clone()
        .unwrap_or_else(|| UNTRACKED_LABEL.to_string());

    let content = |kind: &UntrackedStateContent| -> Option<String> {
        match kind {
            UntrackedStateContent::Name => Some(label.clone()),
            UntrackedStateContent::State => {
                Some(format_value(value, config.precision, config.unit.as_deref()))
            }
            UntrackedStateContent::Percentage => Some(format_percentage(share, config.precision)),
            UntrackedStateContent::Icon => None,
        }
    };

    let separator = config.state_content_separator.as_str();
    let legend_text = join_content(config.untracked_state_content.iter().filter_map(&content), separator);
    let line_text = config
        .untracked_line_state_content
        .as_ref()
        .map(|kinds| join_content(kinds.iter().filter_map(&content), separator))
        .filter(|text| !text.is_empty());

    Some(UntrackedBar {
        value,
        percentage: share,
        width,
        color: main.color.clone(),
        legend_visible: config.untracked_legend && !config.legend_hide,
        line_text,
        line_text_color: main.text_color.clone(),
        legend_text,
        label,
    })
}

fn resolve_main_delta(
    config: &ResolvedConfig,
    main: &MainBar,
    ctx: &RenderContext<'_>,
) -> Option<Delta> {
    if !config.show_delta || config.delta_position == Position::None {
        return None;
    }
    let provider = ctx.statistics?;
    let entity = config.entity.as_deref()?;
    let current = main.value?;

    let window = match StatisticsWindow::new(
        ctx.now,
        config.statistics_day_offset,
        config.statistics_period,
        config.statistics_function,
    ) {
        Ok(window) => window,
        Err(err) => {
            tracing::warn!(entity, error = %err, "Cannot build statistics window, hiding delta");
            return None;
        }
    };

    resolve_delta(provider, entity, current, window)
}

/// Stable ordering of entity bars; bars without a value sort last
pub fn sort_entities(entities: &mut [EntityBar], sorting: Sorting) {
    match sorting {
        Sorting::AlphaAsc => entities.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        Sorting::AlphaDesc => entities.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase())),
        Sorting::ValueAsc => entities.sort_by(|a, b| match (a.value, b.value) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (x, y) => x.is_none().cmp(&y.is_none()),
        }),
        Sorting::ValueDesc => entities.sort_by(|a, b| match (a.value, b.value) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (x, y) => x.is_none().cmp(&y.is_none()),
        }),
        Sorting::None => {}
    }
}

fn join_content(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}
