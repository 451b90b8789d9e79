use std::{fs, path::Path};

use tracing::{debug, warn};

use super::{parse_count, parse_switch, ConfigError, ConfigPaths, ShellConfig};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut ShellConfig) -> Result<(), ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            return Ok(());
        };

        if path.exists() {
            self.source(path, config)
        } else if self.paths.required {
            Err(ConfigError::ConfigFileNotFound(path.clone()))
        } else {
            Ok(())
        }
    }

    fn source(&self, path: &Path, config: &mut ShellConfig) -> Result<(), ConfigError> {
        debug!(path = %path.display(), "loading rc file");
        let content = fs::read_to_string(path)?;
        self.apply(&content, config)
    }

    fn apply(&self, content: &str, config: &mut ShellConfig) -> Result<(), ConfigError> {
        for (index, line) in content.lines().enumerate() {
            self.process_line(index + 1, line, config)?;
        }
        Ok(())
    }

    fn process_line(
        &self,
        number: usize,
        line: &str,
        config: &mut ShellConfig,
    ) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(ConfigError::Malformed { line: number })?;
        let key = key.trim();
        let mut value = value.trim();

        // Remove quotes if present
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }

        match key {
            "history_size" => config.history_size = parse_count(key, value)?,
            "max_args" => config.max_args = parse_count(key, value)?,
            "quiet" => config.quiet = parse_switch(key, value)?,
            _ => warn!(key, line = number, "ignoring unknown rc setting"),
        }
        Ok(())
    }
}
