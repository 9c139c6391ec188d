use std::path::Path;

use crate::error::ConfigError;
use crate::game::{PlayerProfile, SessionSettings, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Color names for the two players; also used as their display labels.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: "red".to_string(),
            two: "blue".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.width must be at least {WIN_LENGTH}"
            )));
        }
        if self.board.height < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.height must be at least {WIN_LENGTH}"
            )));
        }
        if self.players.one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one must not be empty".into(),
            ));
        }
        if self.players.two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two must not be empty".into(),
            ));
        }
        if self.players.one.eq_ignore_ascii_case(&self.players.two) {
            return Err(ConfigError::Validation(
                "players.one and players.two must be distinct".into(),
            ));
        }
        Ok(())
    }

    /// Settings for a fresh [`crate::game::GameSession`].
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            width: self.board.width,
            height: self.board.height,
            profiles: [
                PlayerProfile::new(self.players.one.as_str()),
                PlayerProfile::new(self.players.two.as_str()),
            ],
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
