//! Value and geometry resolution
//!
//! Turns a [`ResolvedConfig`](gauge_types::ResolvedConfig) plus live states
//! into a [`GaugeRender`].

mod delta;
mod format;
mod geometry;
mod plan;
mod severity;
mod state;


pub use delta::{
    Delta, FixedStatistics, StatisticsError, StatisticsProvider, StatisticsWindow, resolve_delta,
};
pub use format::{format_percentage, format_value, percentage};
pub use geometry::{resolve_bound, resolve_width};
pub use plan::{
    EntityBar, GaugeRender, MainBar, RenderContext, UNTRACKED_LABEL, UntrackedBar, resolve_gauge,
    sort_entities,
};
pub use severity::severity_color;
pub use state::{EntityState, StateSnapshot, UNAVAILABLE};
