//! Game configuration
//!
//! Screen geometry, shape sizes, tick period and an optional RNG seed. The
//! configuration is read once at startup from a JSON file (if one exists),
//! validated, and never changes afterwards.
//!
//! Lookup order:
//! 1. Path passed as the first command-line argument
//! 2. `<config dir>/learning-game/config.json`
//! 3. Built-in defaults

use crate::player::PLAYER_BOTTOM_MARGIN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user config directory under the platform config dir.
const CONFIG_DIR_NAME: &str = "learning-game";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub player_width: u32,
    pub player_height: u32,
    pub obstacle_width: u32,
    pub obstacle_height: u32,
    /// Milliseconds between simulation ticks.
    pub tick_ms: u64,
    /// Fixed seed for reproducible runs. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 800,
            screen_height: 600,
            player_width: 50,
            player_height: 50,
            obstacle_width: 20,
            obstacle_height: 20,
            tick_ms: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads and validates a config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the config for this run.
    ///
    /// An explicit path must exist and parse. The per-user file is only used
    /// if present; otherwise the defaults apply.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("Loading config from {}", path.display());
            return GameConfig::load_from_file(&path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                log::info!("Loading config from {}", path.display());
                GameConfig::load_from_file(&path)
            }
            _ => {
                log::info!("No config file found, using defaults");
                let config = GameConfig::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Checks the startup preconditions the game loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid("screen size must be non-zero".to_string()));
        }
        if self.player_width == 0 || self.player_height == 0 {
            return Err(ConfigError::Invalid("player size must be non-zero".to_string()));
        }
        if self.obstacle_width == 0 || self.obstacle_height == 0 {
            return Err(ConfigError::Invalid("obstacle size must be non-zero".to_string()));
        }
        // Spawn range is [w/2, W - w/2), empty unless W > w
        if self.screen_width <= self.obstacle_width {
            return Err(ConfigError::Invalid(format!(
                "screen width {} must exceed obstacle width {}",
                self.screen_width, self.obstacle_width
            )));
        }
        if self.player_width > self.screen_width {
            return Err(ConfigError::Invalid(format!(
                "player width {} does not fit screen width {}",
                self.player_width, self.screen_width
            )));
        }
        if (self.player_height as i64) + (PLAYER_BOTTOM_MARGIN as i64) > self.screen_height as i64 {
            return Err(ConfigError::Invalid(format!(
                "player height {} does not fit screen height {}",
                self.player_height, self.screen_height
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick period must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }
}

/// `<config dir>/learning-game/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Errors that can occur while loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    /// Values that would make the game impossible to set up
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.tick_period(), std::time::Duration::from_millis(20));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_config(r#"{ "seed": 42, "tick_ms": 30 }"#);
        let config = GameConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_ms, 30);
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.obstacle_width, 20);
    }

    #[test]
    fn test_load_malformed_file() {
        let file = write_config("{ not json");
        let result = GameConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::load_from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let file = write_config(r#"{ "seed": 7 }"#);
        let config = GameConfig::resolve(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_obstacle_wider_than_screen() {
        let config = GameConfig {
            screen_width: 20,
            obstacle_width: 20,
            player_width: 10,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_player_that_does_not_fit() {
        let too_wide = GameConfig {
            player_width: 900,
            ..GameConfig::default()
        };
        assert!(too_wide.validate().is_err());

        let too_tall = GameConfig {
            player_height: 590,
            ..GameConfig::default()
        };
        assert!(too_tall.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tick() {
        let config = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected_on_load() {
        let file = write_config(r#"{ "screen_width": 10 }"#);
        let result = GameConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_error_converts_to_string() {
        let message: String = ConfigError::Invalid("bad".to_string()).into();
        assert_eq!(message, "Invalid config: bad");
    }
}
