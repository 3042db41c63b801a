//! Error types for field extraction and form rendering

use thiserror::Error;

/// Boxed error produced by a templating collaborator
pub type TemplateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result type alias for rendering
pub type RenderResult<T> = Result<T, RenderError>;

/// Error raised by the field extractor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The resolved top-level value is not a record
    #[error("invalid value; only records are supported, got {kind}")]
    InvalidInputKind { kind: String },
}

impl ExtractError {
    /// Returns a stable numeric code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            ExtractError::InvalidInputKind { .. } => 1,
        }
    }
}

/// Error raised by the form renderer
#[derive(Error, Debug)]
pub enum RenderError {
    /// Extraction failed before any markup was produced
    #[error(transparent)]
    InvalidInput(#[from] ExtractError),

    /// The templating collaborator failed on a field
    #[error("template execution failed for field {field}: {source}")]
    TemplateExecution {
        field: String,
        #[source]
        source: TemplateError,
    },
}

impl RenderError {
    /// Returns a stable numeric code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            RenderError::InvalidInput(inner) => inner.error_code(),
            RenderError::TemplateExecution { .. } => 2,
        }
    }

    /// Name of the field whose template failed, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            RenderError::InvalidInput(_) => None,
            RenderError::TemplateExecution { field, .. } => Some(field),
        }
    }
}

/// Error raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration bytes were not valid JSON for [`FormConfig`](crate::FormConfig)
    #[error("configuration parse error: {0}")]
    Parse(String),

    /// A value parsed but is not acceptable
    #[error("invalid configuration value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl ConfigError {
    /// Returns a stable numeric code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            ConfigError::Parse(_) => 3,
            ConfigError::InvalidValue { .. } => 4,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
