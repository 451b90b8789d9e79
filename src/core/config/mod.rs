use std::path::PathBuf;

mod loader;
mod paths;

use loader::ConfigLoader;
pub use paths::ConfigPaths;

use super::parser::DEFAULT_MAX_ARGS;
use crate::flags::Flags;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Settings for one shell session.
///
/// Built from defaults, then the rc file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub history_size: usize,
    pub max_args: usize,
    pub quiet: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            history_size: DEFAULT_HISTORY_CAPACITY,
            max_args: DEFAULT_MAX_ARGS,
            quiet: false,
        }
    }
}

impl ShellConfig {
    pub fn load(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = match flags.get_value("config") {
            Some(path) => ConfigPaths::explicit(PathBuf::from(path)),
            None => ConfigPaths::new(),
        };

        let mut config = Self::default();
        ConfigLoader::new(&paths).load_configs(&mut config)?;
        config.apply_flags(flags)?;
        Ok(config)
    }

    /// Command-line flags win over anything the rc file said.
    pub fn apply_flags(&mut self, flags: &Flags) -> Result<(), ConfigError> {
        if let Some(value) = flags.get_value("history-size") {
            self.history_size = parse_count("history-size", value)?;
        }
        if let Some(value) = flags.get_value("max-args") {
            self.max_args = parse_count("max-args", value)?;
        }
        if flags.is_set("quiet") {
            self.quiet = true;
        }
        Ok(())
    }
}

pub(crate) fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

pub(crate) fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("line {line}: expected `key = value`")]
    Malformed { line: usize },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
