//! Logging setup for applications embedding structform
//!
//! Installs a `tracing-subscriber` fmt layer behind a reloadable level filter.
//! `RUST_LOG` narrows output further when set.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use structform_core::{ConfigError, FormConfig, LogLevel};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, Registry>>>,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, Registry>) {
        *self.handle.lock() = Some(handle);
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        if let Some(handle) = guard.as_ref() {
            handle
                .reload(convert_level_to_filter(level))
                .map_err(|e| format!("Failed to reload filter: {}", e))?;
            Ok(())
        } else {
            Err("Reload handle not initialized".to_string())
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global subscriber at `level`
///
/// Returns `false` when a global subscriber was already set, in which case
/// nothing changes.
pub fn init_logging(level: LogLevel) -> bool {
    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle);
    tracing::debug!(%level, "logging initialized");
    true
}

/// Install the global subscriber at the configured level
pub fn init_logging_from_config(config: &FormConfig) -> Result<bool, ConfigError> {
    let level = config.parsed_log_level()?;
    Ok(init_logging(level))
}

/// Change the level of a subscriber installed by [`init_logging`]
pub fn set_log_level(level: LogLevel) -> Result<(), String> {
    ReloadHandle::global().reload_level(level)
}

/// Convert LogLevel to tracing LevelFilter
fn convert_level_to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
