//! Theme variable lookup
//!
//! Colors in a gauge config may reference theme variables (`var(--name)`).
//! The host supplies their current values through [`ThemeLookup`]; nothing in
//! the core reads global style state.

use std::collections::BTreeMap;

use gauge_types::theme_vars;
use serde::{Deserialize, Serialize};

/// Resolves theme variables to CSS color text.
pub trait ThemeLookup {
    /// Value of the variable `name` (without the leading `--`)
    fn variable(&self, name: &str) -> Option<String>;
}

/// A theme that resolves nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTheme;

impl ThemeLookup for NoTheme {
    fn variable(&self, _name: &str) -> Option<String> {
        None
    }
}

impl<F> ThemeLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn variable(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Map-backed theme, as persisted by the CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeVariables(BTreeMap<String, String>);

impl ThemeVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables of the stock light theme
    pub fn stock() -> Self {
        let mut vars = Self::new();
        vars.insert(theme_vars::PRIMARY_COLOR, "#03A9F4");
        vars.insert(theme_vars::PRIMARY_TEXT_COLOR, "#212121");
        vars.insert(theme_vars::SECONDARY_TEXT_COLOR, "#727272");
        vars.insert(theme_vars::SECONDARY_BACKGROUND_COLOR, "#E5E5E5");
        vars.insert(theme_vars::CARD_BACKGROUND_COLOR, "#FFFFFF");
        vars
    }

    /// Set a variable; a leading `--` on the name is ignored
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = name.trim().trim_start_matches("--");
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ThemeLookup for ThemeVariables {
    fn variable(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}
