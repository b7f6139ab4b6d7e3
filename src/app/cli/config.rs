//! TOML configuration file loading
//!
//! Values from the file fill in whatever the command line left unset;
//! list values (plugins, exclusions) are merged.

use crate::core::error_handling::ContextualError;
use crate::core::logging::LogFormat;
use crate::core::validation::ValidationError;
use crate::rules::api::builtin_rules;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::args::Args;

/// File name of the default configuration, in the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".sqllintrc.toml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Error in configuration file {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Configuration file already exists: {} (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Could not write configuration file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No home directory found; use --config to name a configuration file")]
    NoHomeDirectory,
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. } | ConfigError::Write { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConfigError::Invalid { source, .. } => Some(source.message()),
            ConfigError::NoHomeDirectory => {
                Some("No home directory found; use --config to name a configuration file")
            }
            _ => None,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// `~/.sqllintrc.toml`, if there is a home directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}

/// Contents written by `--init`
pub fn default_config() -> String {
    let mut text = String::from(
        "# sqllint configuration\n\
         \n\
         # log-level = \"info\"\n\
         # log-format = \"text\"\n\
         # log-file = \"none\"\n\
         # color = true\n\
         # max-parallel = 8\n\
         # plugins = [\"dump\"]\n\
         # exclude-plugin = []\n\
         \n\
         [rules]\n",
    );
    for rule in builtin_rules() {
        text.push_str(&format!("{} = \"{}\"\n", rule.name(), rule.default_severity()));
    }
    text
}

/// Write the default configuration, refusing to overwrite unless `force`
pub async fn write_default_config(path: &Path, force: bool) -> ConfigResult<()> {
    if !force && tokio::fs::metadata(path).await.is_ok() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    tokio::fs::write(path, default_config())
        .await
        .map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Wrote default configuration to {}", path.display());
    Ok(())
}

impl Args {
    /// The configuration file that applies to this invocation
    ///
    /// An explicit `--config` path is returned whether or not it exists; the
    /// default path only if it exists.
    pub fn resolve_config_path(&self) -> Option<PathBuf> {
        match &self.config_file {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|path| path.is_file()),
        }
    }

    /// Load and apply the configuration file, returning its path if one was used
    pub async fn load_config(&mut self) -> ConfigResult<Option<PathBuf>> {
        let Some(path) = self.resolve_config_path() else {
            log::debug!("No configuration file; using defaults");
            return Ok(None);
        };
        if self.config_file.is_some() && !path.exists() {
            return Err(ConfigError::NotFound { path });
        }

        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
        let config = contents
            .parse::<toml::Table>()
            .map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        Self::apply_toml_values(self, &config).map_err(|source| ConfigError::Invalid {
            path: path.clone(),
            source,
        })?;
        self.normalise();

        log::debug!("Loaded configuration from {}", path.display());
        Ok(Some(path))
    }

    /// Apply string or string-array value, extending `target`
    fn apply_string_array_field(
        config: &toml::Table,
        key: &str,
        target: &mut Vec<String>,
    ) -> Result<(), ValidationError> {
        let Some(value) = config.get(key) else {
            return Ok(());
        };
        if let Some(str_val) = value.as_str() {
            target.push(str_val.to_string());
        } else if let Some(array_val) = value.as_array() {
            for item in array_val {
                let item = item.as_str().ok_or_else(|| {
                    ValidationError::new(&format!("'{}' entries must be strings", key))
                })?;
                target.push(item.to_string());
            }
        } else {
            return Err(ValidationError::new(&format!(
                "'{}' must be a string or a list of strings",
                key
            )));
        }
        Ok(())
    }

    fn string_field<'a>(config: &'a toml::Table, key: &str) -> Result<Option<&'a str>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| ValidationError::new(&format!("'{}' must be a string", key))),
        }
    }

    /// Apply TOML configuration values to Args
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ValidationError> {
        if let Some(level) = Self::string_field(config, "log-level")? {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ValidationError::new(&format!(
                    "Invalid log-level '{}' (expected one of {})",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
            args.log_level.get_or_insert_with(|| level.to_ascii_lowercase());
        }
        if let Some(format) = Self::string_field(config, "log-format")? {
            LogFormat::from_str(format).map_err(|_| {
                ValidationError::new(&format!(
                    "Invalid log-format '{}' (expected text, ext or json)",
                    format
                ))
            })?;
            args.log_format.get_or_insert_with(|| format.to_ascii_lowercase());
        }
        if let Some(log_file) = Self::string_field(config, "log-file")? {
            if args.log_file.is_none() && !(log_file.eq_ignore_ascii_case("none") || log_file == "-") {
                args.log_file = Some(PathBuf::from(log_file));
            }
        }
        if let Some(value) = config.get("color") {
            let color = value
                .as_bool()
                .ok_or_else(|| ValidationError::new("'color' must be true or false"))?;
            args.color = Some(color);
        }
        if let Some(value) = config.get("max-parallel") {
            let max_parallel = value
                .as_integer()
                .filter(|n| *n > 0)
                .ok_or_else(|| ValidationError::new("'max-parallel' must be a positive integer"))?;
            args.max_parallel.get_or_insert(max_parallel as usize);
        }

        Self::apply_string_array_field(config, "plugins", &mut args.plugins)?;
        Self::apply_string_array_field(config, "exclude-plugin", &mut args.plugin_exclusions)?;

        if let Some(value) = config.get("rules") {
            let rules = value
                .as_table()
                .ok_or_else(|| ValidationError::new("'rules' must be a table"))?;
            for (name, severity) in rules {
                let severity = severity.as_str().ok_or_else(|| {
                    ValidationError::new(&format!("Severity of rule '{}' must be a string", name))
                })?;
                args.rules.insert(name.clone(), severity.to_string());
            }
        }

        for key in config.keys() {
            if !matches!(
                key.as_str(),
                "log-level"
                    | "log-format"
                    | "log-file"
                    | "color"
                    | "max-parallel"
                    | "plugins"
                    | "exclude-plugin"
                    | "rules"
            ) {
                log::warn!("Ignoring unknown configuration key '{}'", key);
            }
        }
        Ok(())
    }
}
