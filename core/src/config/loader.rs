//! Loading card configs and state snapshots from disk

use std::path::Path;

use serde_json::Value;

use crate::render::StateSnapshot;

use super::error::ConfigError;
use super::raw::RawConfig;

/// File formats accepted for card configs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}

/// Load a raw card config from a `.json` or `.toml` file
pub fn load_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = read(path)?;

    let value = match format {
        ConfigFormat::Json => parse_json(path, &content)?,
        ConfigFormat::Toml => toml::from_str::<Value>(&content).map_err(|source| {
            ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            }
        })?,
    };

    match value {
        Value::Object(map) => Ok(RawConfig::new(map)),
        _ => Err(ConfigError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a JSON map of entity id to `{ state, attributes }`
pub fn load_state_snapshot(path: &Path) -> Result<StateSnapshot, ConfigError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json(path: &Path, content: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(content).map_err(|source| ConfigError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("line-gauge-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_toml_config() {
        let path = write_temp(
            "card.toml",
            r#"
entity = "sensor.power"
colour = "red"

[[entities]]
entity = "sensor.plug"
"#,
        );

        let raw = load_raw_config(&path).unwrap();
        assert_eq!(raw.str("entity"), Some("sensor.power"));
        assert_eq!(raw.str("color"), Some("red"));
        assert_eq!(raw.array("entities").map(Vec::len), Some(1));
    }

    #[test]
    fn loads_json_config() {
        let path = write_temp("card.json", r#"{ "entity": "sensor.power", "min": 5 }"#);
        let raw = load_raw_config(&path).unwrap();
        assert_eq!(raw.number("min"), Some(5.0));
    }

    #[test]
    fn rejects_unknown_extension_and_non_objects() {
        let yaml = write_temp("card.yaml", "entity: x");
        assert!(matches!(
            load_raw_config(&yaml),
            Err(ConfigError::UnsupportedFormat { .. })
        ));

        let list = write_temp("list.json", "[1, 2]");
        assert!(matches!(
            load_raw_config(&list),
            Err(ConfigError::NotAnObject { .. })
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("line-gauge-does-not-exist.json");
        assert!(matches!(load_raw_config(&path), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn loads_state_snapshot() {
        let path = write_temp(
            "states.json",
            r#"{ "sensor.power": { "state": "120.5" }, "sensor.plug": { "state": 40, "attributes": { "current": 0.2 } } }"#,
        );
        let states = load_state_snapshot(&path).unwrap();
        assert_eq!(states.numeric("sensor.power", None), Some(120.5));
        assert_eq!(states.numeric("sensor.plug", Some("current")), Some(0.2));
    }
}
