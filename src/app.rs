use adw::Application;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_CONTAINER_URL: &str =
    "https://cdn.matomo.cloud/clinlife.matomo.cloud/container_egk1f0D4.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub queue_name: String,
    pub container_url: String,
    pub bootstrap_delay_ms: u64,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            queue_name: "_mtm".into(),
            container_url: DEFAULT_CONTAINER_URL.into(),
            bootstrap_delay_ms: 1500,
            log_filter: "info".into(),
        }
    }
}

impl AppConfig {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("synthetic-events.toml"))
    }

    /// Reads the config file; a missing file (or config dir) gives defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::toml_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path: display, source }),
        };
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse { path: display, source })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

pub fn build_ui(app: &Application, config: &AppConfig) {
    crate::ui::toast::apply_theme();
    crate::ui::main_window::show_main_window(app, config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let cfg = AppConfig::from_toml_str("queue_name = \"_paq\"\nbootstrap_delay_ms = 0\n").unwrap();
        assert_eq!(cfg.queue_name, "_paq");
        assert_eq!(cfg.bootstrap_delay_ms, 0);
        assert_eq!(cfg.container_url, DEFAULT_CONTAINER_URL);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(AppConfig::from_toml_str("bootstrap_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("synthetic-events-does-not-exist.toml");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("synthetic-events-{}.toml", std::process::id()));
        fs::write(&path, "queue_name = [").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("synthetic-events-"));
    }
}
