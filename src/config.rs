use crate::model::ExportQuoting;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory CSV exports are written into. Empty means the working directory.
    pub export_dir: String,
    pub export_quoting: ExportQuoting,
    /// Default tracing filter, overridden by `APIHUB_LOG`
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: String::new(),
            export_quoting: ExportQuoting::default(),
            log_level: "info".to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".apihub-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Where exports go, resolved against the working directory when unset
    pub fn export_path(&self) -> PathBuf {
        if self.export_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.export_dir)
        }
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            export_dir: "/tmp/exports".to_string(),
            export_quoting: ExportQuoting::Escaped,
            log_level: "debug".to_string(),
            tick_rate_ms: 100,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), Some(config));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "export_quoting": "escaped" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.export_quoting, ExportQuoting::Escaped);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.export_path(), PathBuf::from("."));
    }

    #[test]
    fn test_unreadable_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_from(&path), None);

        fs::write(&path, "not json").unwrap();
        assert_eq!(Config::load_from(&path), None);
    }
}
