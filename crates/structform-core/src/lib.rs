//! structform-core - Field extraction and form rendering
//!
//! This crate provides:
//! - [`Record`] and [`Field`] reflection traits, usually derived with `#[derive(Form)]`
//! - [`extract`] / [`Extractor`] flattening a record into [`FieldDescriptor`]s
//! - [`render`] / [`Renderer`] feeding descriptors through a [`Template`]
//! - [`HandlebarsTemplate`] as the default templating collaborator
//! - [`FormConfig`] for configuration

mod config;
mod descriptor;
mod error;
mod extract;
mod field;
mod record;
mod render;
mod template;
mod value;

pub use config::{DEFAULT_SEPARATOR, FormConfig};
pub use descriptor::{DEFAULT_INPUT_TYPE, FieldDescriptor};
pub use error::{
    ConfigError, ExtractError, ExtractResult, RenderError, RenderResult, TemplateError,
};
pub use extract::{Extractor, extract};
pub use field::{Field, Resolved};
pub use record::{FieldInfo, Record, RecordRef, Visibility, ZeroFieldFn, ZeroRecord};
pub use render::{Html, Renderer, render};
pub use template::{DEFAULT_INPUT_TEMPLATE, HandlebarsTemplate, Template};
pub use value::FieldValue;

/// Log levels understood by configuration and logging setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Extractor, Field, FieldDescriptor, FieldValue, FormConfig, HandlebarsTemplate, Html,
        Record, RenderError, Renderer, Template, extract, render,
    };
}

#[cfg(test)]
mod test_support;
