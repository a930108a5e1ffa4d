//! Card configuration
//!
//! ```text
//!   .json / .toml file ──► loader ──► RawConfig ──► normalize ──► ResolvedConfig
//!                                                      │
//!                                           ThemeLookup (color dedup)
//! ```

pub mod defaults;
mod duration;
mod error;
mod loader;
mod normalize;
mod raw;

#[cfg(test)]
mod normalize_tests;

pub use duration::parse_duration;
pub use error::ConfigError;
pub use loader::{ConfigFormat, load_raw_config, load_state_snapshot};
pub use normalize::{normalize, normalize_entities, normalize_severity_levels, validate_color};
pub use raw::RawConfig;
