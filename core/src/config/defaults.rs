//! Default values applied during normalization

use gauge_types::{
    Corner, CssColor, Indicator, LegendAlignment, LinePosition, LineSeparatorWidth,
    OverflowDirection, Position, StateContent, StatisticsFunction, StatisticsPeriod, TextOverflow,
    UntrackedStateContent, ValuePosition, theme_vars,
};

// Title
pub const TITLE_POSITION: Position = Position::TopLeft;
pub const TITLE_TEXT_SIZE: f64 = 2.0;

// Value
pub const MIN: f64 = 0.0;
pub const PRECISION: u32 = 0;
pub const MAX_PRECISION: u32 = 100;
pub const CUTOFF: f64 = 0.0;
pub const POSITION: ValuePosition = ValuePosition::Left;
pub const TEXT_SIZE: f64 = 2.5;

// Styling
pub const LINE_HEIGHT: f64 = 3.0;
pub const CORNER: Corner = Corner::Square;
pub const STATE_CONTENT_SEPARATOR: &str = " \u{2E31} ";
pub const LINE_SEPARATOR_WIDTH: LineSeparatorWidth = LineSeparatorWidth::Total050;

// Line text
pub const LINE_TEXT_POSITION: LinePosition = LinePosition::Left;
pub const LINE_TEXT_SIZE: f64 = 1.0;
pub const LINE_TEXT_OVERFLOW: TextOverflow = TextOverflow::Tooltip;
pub const OVERFLOW_DIRECTION: OverflowDirection = OverflowDirection::Right;

// Legend
pub const LEGEND_POSITION: Position = Position::BottomCenter;
pub const LEGEND_ALIGNMENT: LegendAlignment = LegendAlignment::Center;
pub const LEGEND_INDICATOR: Indicator = Indicator::IconFallback;
pub const LEGEND_TEXT_SIZE: f64 = 1.0;

// Delta
pub const DELTA_POSITION: Position = Position::BottomCenter;

// Untracked
pub const UNTRACKED_LEGEND_INDICATOR: Indicator = Indicator::IconFallback;
pub const UNTRACKED_STATE_CONTENT: &[UntrackedStateContent] = &[UntrackedStateContent::Name];

// Statistics
pub const STATISTICS_DAY_OFFSET: u32 = 1;
pub const STATISTICS_PERIOD: StatisticsPeriod = StatisticsPeriod::Hour;
pub const STATISTICS_FUNCTION: StatisticsFunction = StatisticsFunction::Mean;

// Entities
pub const ENTITY_MULTIPLIER: f64 = 1.0;
pub const ENTITY_STATE_CONTENT: &[StateContent] = &[StateContent::Name];

/// Entity ids that mean "nothing selected"
pub const PLACEHOLDER_ENTITY_IDS: [&str; 3] = ["none", "null", "undefined"];

pub fn title_text_color() -> CssColor {
    CssColor::var(theme_vars::PRIMARY_TEXT_COLOR)
}

pub fn subtitle_text_color() -> CssColor {
    CssColor::var(theme_vars::SECONDARY_TEXT_COLOR)
}

pub fn text_color() -> CssColor {
    CssColor::var(theme_vars::PRIMARY_TEXT_COLOR)
}

pub fn line_separator_color() -> CssColor {
    CssColor::var(theme_vars::CARD_BACKGROUND_COLOR)
}

/// Bar color, also the fallback for severity levels with a bad color
pub fn color() -> CssColor {
    CssColor::var(theme_vars::PRIMARY_COLOR)
}

pub fn color_bg() -> CssColor {
    CssColor::var(theme_vars::SECONDARY_BACKGROUND_COLOR)
}

pub fn legend_text_color() -> CssColor {
    CssColor::var(theme_vars::SECONDARY_TEXT_COLOR)
}
