use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::duck::{Duck, FlyKind, QuackKind};
use crate::error::ConfigError;
use crate::weather::{Measurement, NonFinitePolicy, WeatherData};

// =============================================================================
// Config sections
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    pub weather: WeatherConfig,
    pub duck: DuckConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherConfig {
    pub non_finite: NonFinitePolicy,
    /// Readings replayed by the weather station demo.
    pub readings: Vec<Measurement>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            non_finite: NonFinitePolicy::default(),
            readings: vec![
                Measurement::new(80.0, 65.0, 30.4),
                Measurement::new(82.0, 70.0, 29.0),
                Measurement::new(78.0, 90.0, 29.2),
            ],
        }
    }
}

impl WeatherConfig {
    pub fn build_subject(&self) -> WeatherData {
        WeatherData::with_policy(self.non_finite)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DuckConfig {
    pub fly: FlyKind,
    pub quack: QuackKind,
}

impl DuckConfig {
    pub fn build_duck(&self) -> Duck {
        Duck::new(self.fly.into_behavior(), self.quack.into_behavior())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `pattern_playground=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl PlaygroundConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Picks the format from the extension. Files without one are sniffed:
    /// a leading `{` means JSON, anything else is read as TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            Some(other) => Err(ConfigError::UnknownFormat {
                extension: other.to_string(),
            }),
            None => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        }
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_defaults_replay_demo_readings() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.weather.readings.len(), 3);
        assert_eq!(config.weather.readings[0], Measurement::new(80.0, 65.0, 30.4));
        assert_eq!(config.weather.non_finite, NonFinitePolicy::Reject);
        assert_eq!(config.duck.fly, FlyKind::WithWings);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_parse_toml() {
        let config = PlaygroundConfig::from_toml(
            r#"
            [weather]
            non_finite = "pass_through"
            readings = [{ temperature = 50.0, humidity = 20.0, pressure = 30.0 }]

            [duck]
            fly = "rocket_powered"
            quack = "squeak"
            "#,
        )
        .unwrap();

        assert_eq!(config.weather.non_finite, NonFinitePolicy::PassThrough);
        assert_eq!(config.weather.readings, vec![Measurement::new(50.0, 20.0, 30.0)]);
        let duck = config.duck.build_duck();
        assert_eq!(duck.perform_fly(), "flying with rocket boost");
        assert_eq!(duck.perform_quack(), "Squeak");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_json() {
        let config = PlaygroundConfig::from_json(
            r#"{ "duck": { "quack": "mute" }, "logging": { "filter": "debug" } }"#,
        )
        .unwrap();
        assert_eq!(config.duck.quack, QuackKind::Mute);
        assert_eq!(config.duck.fly, FlyKind::WithWings);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.weather, WeatherConfig::default());
    }

    #[test]
    fn test_unknown_behavior_is_parse_error() {
        let err = PlaygroundConfig::from_toml("[duck]\nfly = \"jet\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = PlaygroundConfig::from_json(r#"{ "weather": { "units": "C" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "weather": {{ "non_finite": "pass_through" }} }}"#).unwrap();

        let config = PlaygroundConfig::from_file(file.path()).unwrap();
        assert_eq!(config.weather.non_finite, NonFinitePolicy::PassThrough);
        assert_eq!(config.weather.build_subject().policy(), NonFinitePolicy::PassThrough);
    }

    #[test]
    fn test_from_file_sniffs_without_extension() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[duck]\nquack = \"mute\"").unwrap();

        let config = PlaygroundConfig::from_file(file.path()).unwrap();
        assert_eq!(config.duck.quack, QuackKind::Mute);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = PlaygroundConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat { extension } if extension == "yaml"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = PlaygroundConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
