//! CLI configuration, loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GraphError, GraphResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Minimum log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Directory for log files when file logging is enabled.
    pub log_dir: String,
    /// Log to a file under `log_dir` instead of stderr.
    pub log_to_file: bool,
    /// Default network snapshot used when `--network` is not given.
    pub network_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_to_file: false,
            network_path: "network.json".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GraphError::Config(e.to_string()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_file);
        assert_eq!(config.network_path, "network.json");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir in test");
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.log_level = "debug".to_string();
        config.network_path = "metro.json".to_string();
        config.save(&path).expect("save in test");

        let loaded = Config::load(&path).expect("load in test");
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.network_path, "metro.json");
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("tempdir in test");
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = [broken").expect("write in test");

        assert!(matches!(Config::load(&path), Err(GraphError::Config(_))));
    }
}
