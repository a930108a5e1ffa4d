pub mod color;
pub mod config;
pub mod options;
pub mod render;
pub mod settings;
pub mod style;
pub mod theme;

// Re-exports for convenience
pub use color::{ColorInput, blend, get_text_color, text_color, to_hex, to_rgb};
pub use config::{ConfigError, RawConfig, load_raw_config, load_state_snapshot, normalize};
pub use render::{
    Delta, EntityState, GaugeRender, RenderContext, StateSnapshot, StatisticsError,
    StatisticsProvider, StatisticsWindow, resolve_gauge, resolve_width,
};
pub use settings::GaugeSettings;
pub use style::{StyleDeclarations, compose_style};
pub use theme::{NoTheme, ThemeLookup, ThemeVariables};
