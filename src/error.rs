use thiserror::Error;

// =============================================================================
// Measurement errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("Invalid measurement: {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}

impl MeasurementError {
    pub fn non_finite(field: &'static str, value: f32) -> Self {
        Self::NonFinite { field, value }
    }
}

// =============================================================================
// Config errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at line {line}, column {col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("Unsupported config format '{extension}' (expected .toml or .json)")]
    UnknownFormat { extension: String },
}

impl ConfigError {
    pub fn parse(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::parse(0, 0, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let error = MeasurementError::non_finite("temperature", f32::NAN);
        let display = format!("{}", error);
        assert!(display.contains("temperature"));
        assert!(display.contains("NaN"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = ConfigError::parse(3, 7, "unexpected token");
        let display = format!("{}", error);
        assert!(display.contains("line 3"));
        assert!(display.contains("column 7"));
    }

    #[test]
    fn test_from_json_error_keeps_location() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        match ConfigError::from(err) {
            ConfigError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
