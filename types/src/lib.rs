//! Shared configuration types for the line gauge
//!
//! This crate contains the serializable, fully resolved configuration types
//! that are produced by `gauge-core` and consumed by whatever presents the
//! gauge (the CLI, or a host UI).

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Color Types
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color as [r, g, b, a] bytes
pub type Color = [u8; 4];

/// A CSS color value as written by the user or produced by defaults.
///
/// Kept as text because it may reference a theme variable (`var(--name)`)
/// that is only resolved when a concrete RGB value is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssColor(String);

impl CssColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reference to a theme variable, e.g. `var(--primary-color)`
    pub fn var(name: &str) -> Self {
        Self(format!("var(--{name})"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CssColor {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Theme variable names used by the default configuration
pub mod theme_vars {
    pub const PRIMARY_COLOR: &str = "primary-color";
    pub const PRIMARY_TEXT_COLOR: &str = "primary-text-color";
    pub const SECONDARY_TEXT_COLOR: &str = "secondary-text-color";
    pub const SECONDARY_BACKGROUND_COLOR: &str = "secondary-background-color";
    pub const CARD_BACKGROUND_COLOR: &str = "card-background-color";
}

// ─────────────────────────────────────────────────────────────────────────────
// Closed Option Sets
// ─────────────────────────────────────────────────────────────────────────────

/// An enumerated option whose valid values form a fixed, ordered set of
/// string literals.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// The literal used in configuration files
    fn as_str(&self) -> &'static str;

    /// Look up a member by its literal (exact, case sensitive)
    fn parse(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == text)
    }
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl ClosedSet for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set! {
    /// Placement of the title, legend and delta blocks
    Position {
        Left => "left",
        Right => "right",
        None => "none",
        TopLeft => "top-left",
        TopMiddle => "top-middle",
        TopCenter => "top-center",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomMiddle => "bottom-middle",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
    }
}

closed_set! {
    /// Placement of the main value (positions plus in-title variants)
    ValuePosition {
        Left => "left",
        Right => "right",
        None => "none",
        TopLeft => "top-left",
        TopMiddle => "top-middle",
        TopCenter => "top-center",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomMiddle => "bottom-middle",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
        InTitleRight => "in-title-right",
        InTitleLeft => "in-title-left",
    }
}

closed_set! {
    /// Placement of text drawn inside a bar
    LinePosition {
        Left => "left",
        Right => "right",
        None => "none",
        TopLeft => "top-left",
        TopMiddle => "top-middle",
        TopCenter => "top-center",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomMiddle => "bottom-middle",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
        Center => "center",
    }
}

closed_set! {
    Corner {
        Square => "square",
        LiteRounded => "lite-rounded",
        MediumRounded => "medium-rounded",
        Rounded => "rounded",
        Circular => "circular",
    }
}

closed_set! {
    /// Ordering of the entity bars
    Sorting {
        AlphaAsc => "alpha-asc",
        AlphaDesc => "alpha-desc",
        ValueAsc => "value-asc",
        ValueDesc => "value-desc",
        None => "none",
    }
}

closed_set! {
    /// Separator width between bars: `total` splits a fixed share of the
    /// gauge across all separators, `each` gives every separator that width.
    LineSeparatorWidth {
        Total020 => "total020",
        Total030 => "total030",
        Total040 => "total040",
        Total050 => "total050",
        Total060 => "total060",
        Total070 => "total070",
        Total080 => "total080",
        Total090 => "total090",
        Total100 => "total100",
        Each002 => "each002",
        Each004 => "each004",
        Each006 => "each006",
        Each008 => "each008",
        Each010 => "each010",
        Each012 => "each012",
        Each014 => "each014",
        Each016 => "each016",
        Each018 => "each018",
        Each020 => "each020",
    }
}

closed_set! {
    TextOverflow {
        Ellipsis => "ellipsis",
        Clip => "clip",
        Tooltip => "tooltip",
        TooltipSegment => "tooltip-segment",
        Fade => "fade",
    }
}

closed_set! {
    OverflowDirection {
        Left => "left",
        Right => "right",
    }
}

closed_set! {
    /// What is drawn in front of a legend label
    Indicator {
        Circle => "circle",
        Icon => "icon",
        IconFallback => "icon-fallback",
        None => "none",
        Name => "name",
        State => "state",
        Percentage => "percentage",
    }
}

closed_set! {
    LegendAlignment {
        Left => "left",
        Right => "right",
        Center => "center",
        SpaceAround => "space-around",
        SpaceBetween => "space-between",
        SpaceEvenly => "space-evenly",
        NewLine => "new-line",
        NewLineLeft => "new-line-left",
        NewLineRight => "new-line-right",
    }
}

closed_set! {
    /// Pieces of text shown for an entity in the legend or inside its bar
    StateContent {
        Name => "name",
        State => "state",
        LastChanged => "last_changed",
        LastUpdated => "last_updated",
        Percentage => "percentage",
        Icon => "icon",
    }
}

closed_set! {
    /// Pieces of text shown for the untracked remainder
    UntrackedStateContent {
        Name => "name",
        State => "state",
        Percentage => "percentage",
        Icon => "icon",
    }
}

closed_set! {
    StatisticsPeriod {
        FiveMinute => "5minute",
        Hour => "hour",
        Day => "day",
        Week => "week",
        Month => "month",
    }
}

closed_set! {
    StatisticsFunction {
        Change => "change",
        LastReset => "last_reset",
        Max => "max",
        Mean => "mean",
        Min => "min",
        State => "state",
        Sum => "sum",
    }
}

closed_set! {
    /// Symbolic text style flags, turned into CSS by the style composer
    TextStyle {
        WeightLighter => "weight-lighter",
        WeightBold => "weight-bold",
        WeightBolder => "weight-bolder",
        StyleItalic => "style-italic",
        DecorationUnderline => "decoration-underline",
        DecorationOverline => "decoration-overline",
        DecorationLineThrough => "decoration-line-through",
        TransformUppercase => "transform-uppercase",
        TransformLowercase => "transform-lowercase",
        TransformCapitalize => "transform-capitalize",
        FamilyMonospace => "family-monospace",
        ShadowLight => "shadow-light",
        ShadowMedium => "shadow-medium",
        ShadowHeavy => "shadow-heavy",
        ShadowHard => "shadow-hard",
        ShadowNeon => "shadow-neon",
        BlackOutline => "black-outline",
        WhiteOutline => "white-outline",
    }
}

closed_set! {
    /// Kind of action bound to tap / hold / double tap
    ActionKind {
        MoreInfo => "more-info",
        Toggle => "toggle",
        Navigate => "navigate",
        Url => "url",
        PerformAction => "perform-action",
        Assist => "assist",
        None => "none",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value Types
// ─────────────────────────────────────────────────────────────────────────────

/// A gauge bound: a fixed number or another entity whose live value is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Value(f64),
    Entity(String),
}

/// Threshold entry used to recolor the gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityLevel {
    pub from: f64,
    pub color: CssColor,
}

/// Action binding carried for the host; dispatch happens outside the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perform_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved Entity
// ─────────────────────────────────────────────────────────────────────────────

/// One child entity after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Always concrete: auto colors are assigned from the palette
    pub color: CssColor,

    /// Falls back to the gauge cutoff when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    pub state_content: Vec<StateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_state_content: Option<Vec<StateContent>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_indicator: Option<Indicator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_text_color: Option<CssColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_text_color: Option<CssColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_action: Option<ActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_action: Option<ActionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_action: Option<ActionConfig>,
}

impl ResolvedEntity {
    /// Label shown in the legend: configured name, else the entity id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.entity)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolved Gauge Config
// ─────────────────────────────────────────────────────────────────────────────

/// Fully defaulted gauge configuration.
///
/// Every enumerated field holds a member of its closed set and no color is
/// left in an `auto` state. `min <= max` is not enforced since `max` may
/// name another entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    // Entity
    pub entity: Option<String>,
    pub attribute: Option<String>,

    // Title
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub header: Option<String>,
    pub title_position: Position,
    pub title_text_size: f64,
    pub title_text_style: Option<Vec<TextStyle>>,
    pub title_text_color: CssColor,
    pub subtitle_text_color: CssColor,

    // Min / Max
    pub min: Bound,
    pub max: Option<Bound>,

    // Value
    pub precision: u32,
    pub unit: Option<String>,
    pub cutoff: f64,
    /// History offset in milliseconds
    pub offset: Option<u64>,
    pub sorting: Option<Sorting>,
    pub position: ValuePosition,
    pub text_size: f64,
    pub text_style: Option<Vec<TextStyle>>,
    pub text_color: CssColor,

    // Styling
    pub line_height: f64,
    pub corner: Corner,
    pub state_content_separator: String,
    pub line_separator: bool,
    pub line_separator_width: LineSeparatorWidth,
    pub line_separator_color: CssColor,
    pub color: CssColor,
    pub color_bg: CssColor,

    // Line text
    pub line_text_position: LinePosition,
    pub line_text_size: f64,
    pub line_text_style: Option<Vec<TextStyle>>,
    /// None means the text color is picked for contrast against each bar
    pub line_text_color: Option<CssColor>,
    pub line_text_overflow: TextOverflow,
    pub overflow_direction: OverflowDirection,

    // Actions
    pub tap_action: Option<ActionConfig>,
    pub hold_action: Option<ActionConfig>,
    pub double_tap_action: Option<ActionConfig>,

    // Legend
    pub legend_hide: bool,
    pub legend_all: bool,
    pub legend_position: Position,
    pub legend_alignment: LegendAlignment,
    pub legend_indicator: Indicator,
    pub legend_text_size: f64,
    pub legend_text_style: Option<Vec<TextStyle>>,
    pub legend_text_color: CssColor,

    // Delta
    pub show_delta: bool,
    pub delta_position: Position,

    // Untracked legend
    pub untracked_legend: bool,
    pub untracked_legend_label: Option<String>,
    pub untracked_legend_icon: Option<String>,
    pub untracked_legend_indicator: Indicator,
    pub untracked_state_content: Vec<UntrackedStateContent>,
    pub untracked_line_state_content: Option<Vec<UntrackedStateContent>>,

    pub suppress_warnings: bool,

    // Statistics
    pub statistics: bool,
    pub statistics_day_offset: u32,
    pub statistics_period: StatisticsPeriod,
    pub statistics_function: StatisticsFunction,

    // Severity
    pub severity: bool,
    /// Sorted by `from`, highest first
    pub severity_levels: Option<Vec<SeverityLevel>>,
    pub severity_blend: bool,

    pub entities: Vec<ResolvedEntity>,
}

impl ResolvedConfig {
    /// Severity levels, only when severity coloring is switched on
    pub fn active_severity_levels(&self) -> Option<&[SeverityLevel]> {
        if !self.severity {
            return None;
        }
        self.severity_levels
            .as_deref()
            .filter(|levels| !levels.is_empty())
    }
}
