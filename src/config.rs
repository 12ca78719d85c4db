//! Configuration handling for the TUI

use crate::state::ConfirmationStyle;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How a successful submit is confirmed ("inline" or "alert-and-reset")
    pub confirmation_style: Option<ConfirmationStyle>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dk", "kontakt", "kontakt-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective confirmation style (inline when the file says nothing)
    pub fn confirmation_style(&self) -> ConfirmationStyle {
        self.confirmation_style.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.confirmation_style.is_none());
        assert_eq!(config.confirmation_style(), ConfirmationStyle::Inline);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            confirmation_style: Some(ConfirmationStyle::AlertAndReset),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.confirmation_style,
            Some(ConfirmationStyle::AlertAndReset)
        );
        assert_eq!(parsed.confirmation_style(), ConfirmationStyle::AlertAndReset);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.confirmation_style.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"confirmation_style": "inline", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.confirmation_style, Some(ConfirmationStyle::Inline));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
