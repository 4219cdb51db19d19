use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persistent application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the fleet backend; absent means offline/mock mode
    pub api_base_url: Option<String>,

    /// Seconds between playback ticks
    pub tick_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            tick_interval_secs: 3600,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fleet-track").join("config.json"))
    }

    /// Load the saved configuration, falling back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(contents) = fs::read_to_string(&path) {
                    if let Ok(config) = serde_json::from_str(&contents) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Persist the configuration
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(self)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_offline() {
        let config = AppConfig::default();
        assert!(config.api_base_url.is_none());
        assert_eq!(config.tick_interval_secs, 3600);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            api_base_url: Some("https://fleet.example.com/api".to_string()),
            tick_interval_secs: 30,
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.api_base_url, config.api_base_url);
        assert_eq!(restored.tick_interval_secs, 30);
    }
}
