//! Form configuration

use crate::LogLevel;
use crate::descriptor::DEFAULT_INPUT_TYPE;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Separator joining ancestor field names into a dotted path
pub const DEFAULT_SEPARATOR: &str = ".";

/// Configuration shared by the extractor, renderer, and logging setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Input type stamped on every descriptor
    #[serde(default = "default_input_type")]
    pub input_type: String,

    /// Separator for nested field names
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Handlebars source rendered once per field
    ///
    /// `None` uses the built-in `<input>` template.
    #[serde(default)]
    pub template: Option<String>,

    /// Fail rendering when a template references an unknown attribute
    #[serde(default)]
    pub strict_templates: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_input_type() -> String {
    DEFAULT_INPUT_TYPE.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            input_type: default_input_type(),
            separator: default_separator(),
            template: None,
            strict_templates: false,
            log_level: default_log_level(),
        }
    }
}

impl FormConfig {
    /// Create a configuration with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_type.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "input_type",
                reason: "must not be empty".to_string(),
            });
        }
        if self.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "separator",
                reason: "must not be empty".to_string(),
            });
        }
        self.parsed_log_level()?;
        Ok(())
    }

    /// The configured log level
    pub fn parsed_log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level
            .parse()
            .map_err(|reason| ConfigError::InvalidValue {
                key: "log_level",
                reason,
            })
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_strict_templates(mut self, strict: bool) -> Self {
        self.strict_templates = strict;
        self
    }
}
