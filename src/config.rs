//! Runtime configuration.
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file, then
//! `SWITCHBOARD_*` environment variables with `__` separating nested keys
//! (for example `SWITCHBOARD_HISTORY__MAX_ENTRIES=25`).

use ::config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::history::domain::HistoryConfig;
use crate::logging::LoggingConfig;

/// Prefix of environment variables read by [`SwitchboardConfig::load`].
pub const ENV_PREFIX: &str = "SWITCHBOARD";

/// Settings for the administrative history resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Whether the history resource is registered at startup.
    pub register_history_resource: bool,
    /// Identifier the history resource is registered under.
    pub resource_id: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            register_history_resource: true,
            resource_id: "switchboard:type=History".to_owned(),
        }
    }
}

/// Complete bridge configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchboardConfig {
    /// History settings.
    pub history: HistoryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Administrative resource settings.
    pub admin: AdminConfig,
}

impl SwitchboardConfig {
    /// Loads configuration from an optional file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or a value has
    /// the wrong type.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(file, None)
    }

    /// Loads configuration from an optional file and an explicit
    /// environment map instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or a value has
    /// the wrong type.
    pub fn load_with_env(
        file: Option<&Path>,
        environment: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::build(file, Some(environment))
    }

    fn build(
        file: Option<&Path>,
        environment: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(environment),
        );
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use rstest::rstest;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[rstest]
    fn defaults_apply_without_sources() {
        let config = SwitchboardConfig::load_with_env(None, Map::new()).expect("load defaults");
        assert_eq!(config, SwitchboardConfig::default());
        assert_eq!(config.history.max_entries, 10);
        assert!(config.admin.register_history_resource);
        assert_eq!(config.admin.resource_id, "switchboard:type=History");
    }

    #[rstest]
    fn environment_overrides_nested_keys() {
        let config = SwitchboardConfig::load_with_env(
            None,
            env(&[
                ("SWITCHBOARD_HISTORY__MAX_ENTRIES", "25"),
                ("SWITCHBOARD_ADMIN__REGISTER_HISTORY_RESOURCE", "false"),
                ("SWITCHBOARD_LOGGING__LEVEL", "debug"),
                ("UNRELATED_HISTORY__MAX_ENTRIES", "99"),
            ]),
        )
        .expect("load from environment");

        assert_eq!(config.history.max_entries, 25);
        assert!(!config.admin.register_history_resource);
        assert_eq!(config.logging.level, "debug");
    }

    #[rstest]
    fn file_values_sit_below_environment() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp file");
        writeln!(
            file,
            "[history]\nmax_entries = 5\n\n[logging]\nformat = \"json\"\nlevel = \"warn\""
        )
        .expect("write config");

        let config = SwitchboardConfig::load_with_env(
            Some(file.path()),
            env(&[("SWITCHBOARD_LOGGING__LEVEL", "trace")]),
        )
        .expect("load layered config");

        assert_eq!(config.history.max_entries, 5);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "trace");
    }

    #[rstest]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.toml");
        assert!(SwitchboardConfig::load_with_env(Some(&path), Map::new()).is_err());
    }

    #[rstest]
    fn negative_cap_is_rejected() {
        let result = SwitchboardConfig::load_with_env(
            None,
            env(&[("SWITCHBOARD_HISTORY__MAX_ENTRIES", "-3")]),
        );
        assert!(result.is_err());
    }
}
