//! Configuration management for souvenir.
//!
//! Configuration is loaded with figment from TOML, environment variables,
//! and defaults. Only ambient concerns live here — the timeline data and
//! the milestone anchors are in-source constants, not configuration.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const APP_DIR_NAME: &str = "souvenir";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SOUVENIR_`)
/// 2. TOML config file at `~/.config/souvenir/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background-music configuration.
    pub audio: AudioConfig,
}

/// Background-music configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Path to the looping background track.
    /// When unset, the player runs without music and the toggle stays on
    /// its "play" affordance.
    pub track: Option<PathBuf>,
    /// Attempt to start playback on launch.
    pub autoplay: bool,
    /// Linear playback volume, `0.0..=1.0`.
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            track: None,
            autoplay: true,
            volume: 0.3,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SOUVENIR_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "audio.volume ({}) must be between 0.0 and 1.0",
                    self.audio.volume
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.audio.track.is_none());
        assert!(config.audio.autoplay);
        assert!((config.audio.volume - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_excess_volume() {
        let mut config = Config::default();
        config.audio.volume = 1.5;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("audio.volume"));
    }

    #[test]
    fn test_validate_rejects_negative_volume() {
        let mut config = Config::default();
        config.audio.volume = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut config = Config::default();
        config.audio.volume = 0.0;
        assert!(config.validate().is_ok());
        config.audio.volume = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("souvenir"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_audio_config_deserialize() {
        let json = r#"{"track": "music/track.ogg", "autoplay": false}"#;
        let audio: AudioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(audio.track, Some(PathBuf::from("music/track.ogg")));
        assert!(!audio.autoplay);
        // Unlisted fields keep their defaults
        assert!((audio.volume - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("autoplay"));
        assert!(json.contains("volume"));
    }
}
