//! Toggler configuration
//!
//! Every field has a default matching the admin import template, so a page
//! only passes what it renames:
//!
//! ```json
//! { "ids": { "url_field": "remote_box" }, "hidden_class": "is-hidden" }
//! ```

use importform_domain::{DomainError, ElementIds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected toggler configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid element ids: {0}")]
    Ids(#[from] DomainError),

    #[error("Invalid hidden class {class:?}: {reason}")]
    HiddenClass { class: String, reason: &'static str },
}

/// Maximum level of emitted log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TogglerConfig {
    /// Ids of the radios and field containers
    pub ids: ElementIds,
    /// Class toggled on a hidden field container
    pub hidden_class: String,
    pub log_level: LogLevel,
}

impl Default for TogglerConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            hidden_class: "hidden".to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl TogglerConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ids.validate()?;
        if self.hidden_class.is_empty() {
            return Err(self.hidden_class_error("empty"));
        }
        // classList.toggle throws on tokens containing whitespace
        if self.hidden_class.chars().any(char::is_whitespace) {
            return Err(self.hidden_class_error("contains whitespace"));
        }
        Ok(())
    }

    fn hidden_class_error(&self, reason: &'static str) -> ConfigError {
        ConfigError::HiddenClass {
            class: self.hidden_class.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = TogglerConfig::from_json("{}").expect("config");
        assert_eq!(config, TogglerConfig::default());
        assert_eq!(config.hidden_class, "hidden");
        assert_eq!(config.log_level.to_tracing(), tracing::Level::INFO);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = TogglerConfig::from_json(
            r#"{"ids": {"url_field": "remote_box"}, "hidden_class": "is-hidden", "log_level": "debug"}"#,
        )
        .expect("config");

        assert_eq!(config.ids.url_field, "remote_box");
        assert_eq!(config.ids.file_field, "file_field");
        assert_eq!(config.hidden_class, "is-hidden");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            TogglerConfig::from_json("{ids"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TogglerConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn bad_hidden_class_is_rejected() {
        for class in ["", "is hidden"] {
            let config = TogglerConfig {
                hidden_class: class.to_string(),
                ..TogglerConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::HiddenClass { .. })),
                "accepted {class:?}"
            );
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = TogglerConfig::from_json(r#"{"ids": {"file_field": "url_field"}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::Ids(DomainError::Validation(_)))
        ));
    }
}
