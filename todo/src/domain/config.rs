//! Configuration domain facade.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{TodoError, TodoResult};
use crate::storage::DEFAULT_DATA_FILE;

/// Config file used when none is given, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".todo/config.json";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoConfig {
    /// Where tasks are persisted
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_color() -> bool {
    true
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            color: default_color(),
        }
    }
}

/// Loads and saves [`TodoConfig`]
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Create a config domain reading from `config_path`
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub fn load(&self) -> TodoResult<TodoConfig> {
        match fs::read_to_string(&self.config_path) {
            Ok(content) => {
                let config: TodoConfig = serde_json::from_str(&content)?;
                debug!(path = %self.config_path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TodoConfig::default()),
            Err(e) => Err(TodoError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Save configuration
    pub fn save(&self, config: &TodoConfig) -> TodoResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| TodoError::FileWriteError {
            path: self.config_path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp_dir.path().join(".todo/config.json"));

        let config = domain.load().unwrap();
        assert_eq!(config.data_file, PathBuf::from("tasks.json"));
        assert!(config.color);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp_dir.path().join(".todo/config.json"));

        let config = TodoConfig {
            data_file: PathBuf::from("/tmp/elsewhere.json"),
            color: false,
        };
        domain.save(&config).unwrap();

        assert_eq!(domain.load().unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"color": false}"#).unwrap();

        let config = ConfigDomain::new(&path).load().unwrap();
        assert_eq!(config.data_file, PathBuf::from("tasks.json"));
        assert!(!config.color);
    }
}
