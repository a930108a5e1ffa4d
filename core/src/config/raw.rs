//! Raw, user-authored configuration
//!
//! A thin view over a JSON object. Nothing here validates; it only answers
//! "what did the user write for this key", honoring the legacy British
//! spellings and treating `null` as not written.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primary key -> legacy alias. The primary key wins when both are present.
static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "color" => "colour",
    "color_bg" => "colour_bg",
    "title_text_color" => "title_text_colour",
    "subtitle_text_color" => "subtitle_text_colour",
    "text_color" => "text_colour",
    "line_separator_color" => "line_separator_colour",
    "line_text_color" => "line_text_colour",
    "legend_text_color" => "legend_text_colour",
};

/// A card config, severity level or entity entry as written by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig(Map<String, Value>);

impl RawConfig {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a JSON value; anything but an object yields an empty config
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Value for `key`, falling back to its alias. `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.lookup(key).or_else(|| {
            ALIASES
                .get(key)
                .and_then(|alias| self.lookup(alias))
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Owned string; numbers are rendered so `name: 3` still reads as text
    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Truthiness of any scalar: non-zero numbers and non-empty strings are true
    pub fn truthy(&self, key: &str) -> Option<bool> {
        self.get(key).map(|value| match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Null => false,
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    /// Number, accepting numeric strings such as `"12.5"`
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Non-negative integer (fractional values are truncated)
    pub fn unsigned(&self, key: &str) -> Option<u32> {
        let value = self.number(key)?;
        (value >= 0.0 && value <= u32::MAX as f64).then(|| value as u32)
    }

    pub fn array(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}

impl From<Map<String, Value>> for RawConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
