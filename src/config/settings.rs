//! Configuration settings for snakk.

use crate::transcript::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub transcript: TranscriptSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Transcript parsing and merging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Timestamp syntax used by transcript files (mm:ss, hh:mm:ss, seconds).
    pub timestamp_format: TimestampFormat,
    /// Output format for consolidated transcripts (text, json).
    pub output_format: String,
    /// Maximum silence in seconds between same-speaker lines that still
    /// merges. Unset merges across any gap.
    pub max_merge_gap_seconds: Option<f64>,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            output_format: "text".to_string(),
            max_merge_gap_seconds: None,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SnakkError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snakk")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(settings.transcript.timestamp_format, TimestampFormat::MinutesSeconds);
        assert_eq!(settings.transcript.output_format, "text");
        assert!(settings.transcript.max_merge_gap_seconds.is_none());
    }

    #[test]
    fn test_partial_config_parses() {
        let settings: Settings = toml::from_str(
            r#"
            [transcript]
            timestamp_format = "seconds"
            max_merge_gap_seconds = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.transcript.timestamp_format, TimestampFormat::Seconds);
        assert_eq!(settings.transcript.max_merge_gap_seconds, Some(2.0));
        // Untouched sections fall back to defaults
        assert_eq!(settings.general.log_level, "info");
    }

    #[test]
    fn test_config_round_trips() {
        let mut settings = Settings::default();
        settings.transcript.max_merge_gap_seconds = Some(1.5);

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let reloaded: Settings = toml::from_str(&serialized).unwrap();

        assert_eq!(reloaded.transcript.max_merge_gap_seconds, Some(1.5));
    }
}
