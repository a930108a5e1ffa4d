//! Persisted user settings
//!
//! Stored with confy under the `line-gauge` app name. Currently this holds
//! the theme variables used to resolve `var(--name)` colors outside a host.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::theme::ThemeVariables;

pub const APP_NAME: &str = "line-gauge";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSettings {
    #[serde(default = "ThemeVariables::stock")]
    pub theme: ThemeVariables,
}

impl Default for GaugeSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariables::stock(),
        }
    }
}

impl GaugeSettings {
    /// Load saved settings, or defaults when none exist yet
    pub fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self).map_err(ConfigError::SaveSettings)
    }

    /// Set a theme variable; a leading `--` on the name is ignored
    pub fn set_theme_variable(&mut self, name: &str, value: &str) {
        self.theme.insert(name, value);
    }
}
