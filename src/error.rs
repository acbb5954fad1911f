//! Error types for configuration handling.
//!
//! Evaluation itself is infallible: Ackermann reductions and sequence steps
//! operate on arbitrary-precision integers and never overflow. The only
//! fallible surface is parsing an [`EvalConfig`](crate::config::EvalConfig).

use std::fmt;

/// Result alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while loading an evaluation config
#[derive(Debug)]
pub enum ConfigError {
    /// Malformed TOML, an unknown field, or a field of the wrong type
    Parse(toml::de::Error),

    /// A field parsed correctly but its value is outside the permitted range
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "Invalid config: {}", err),
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid value for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "ackermann.initial_capacity",
            reason: "must not exceed 1048576".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ackermann.initial_capacity: must not exceed 1048576"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let toml_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("Invalid config: "));
        assert!(err.source().is_some());
    }
}
