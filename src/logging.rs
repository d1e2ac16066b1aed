//! Structured logging initialisation.
//!
//! Library code only emits `tracing` events; binaries embedding the bridge
//! call [`init_logging`] once to install a subscriber.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether a subscriber is installed at all.
    pub enabled: bool,
    /// Default level directive: trace, debug, info, warn, error, off.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Module-specific levels, e.g. `switchboard::dispatch = "debug"`.
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_owned(),
            format: LogFormat::Text,
            modules: BTreeMap::new(),
        }
    }
}

/// Errors returned while installing the subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggingError {
    /// A level directive could not be parsed.
    #[error("invalid log directive '{directive}': {reason}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        reason: String,
    },
    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Builds the level filter.
///
/// `RUST_LOG` takes precedence over the configured level; module entries
/// are added on top of either.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidDirective`] for malformed directives.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    let mut filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|err| {
            LoggingError::InvalidDirective {
                directive: config.level.clone(),
                reason: err.to_string(),
            }
        })?,
    };
    for (module, level) in &config.modules {
        let raw = format!("{module}={level}");
        let directive: Directive = raw.parse().map_err(|err: tracing_subscriber::filter::ParseError| {
            LoggingError::InvalidDirective {
                directive: raw.clone(),
                reason: err.to_string(),
            }
        })?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Installs the global subscriber described by `config`.
///
/// Does nothing when logging is disabled.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidDirective`] for malformed directives or
/// [`LoggingError::AlreadyInitialised`] when a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }
    let filter = build_env_filter(config)?;
    let registry = Registry::default().with(filter);
    let result = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    result.map_err(|err| LoggingError::AlreadyInitialised(err.to_string()))
}
