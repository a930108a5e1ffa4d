//! Read-only snapshot of entity states

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNAVAILABLE: &str = "unavailable";

/// Current state of one entity as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    /// Text or number; hosts usually report numbers as text
    #[serde(default)]
    pub state: Value,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl EntityState {
    pub fn new(state: impl Into<Value>) -> Self {
        Self {
            state: state.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn is_unavailable(&self) -> bool {
        self.state.as_str() == Some(UNAVAILABLE)
    }

    /// Numeric state, or the numeric value of `attribute` when given
    pub fn numeric(&self, attribute: Option<&str>) -> Option<f64> {
        if self.is_unavailable() {
            return None;
        }
        match attribute {
            Some(name) => self.attributes.get(name).and_then(as_number),
            None => as_number(&self.state),
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Entity id -> state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot(HashMap<String, EntityState>);

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: impl Into<String>, state: EntityState) {
        self.0.insert(entity.into(), state);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, entity: impl Into<String>, state: EntityState) -> Self {
        self.insert(entity, state);
        self
    }

    pub fn get(&self, entity: &str) -> Option<&EntityState> {
        self.0.get(entity)
    }

    /// Numeric state of `entity`; `None` when missing, unavailable or not a number
    pub fn numeric(&self, entity: &str, attribute: Option<&str>) -> Option<f64> {
        self.get(entity)?.numeric(attribute)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
