use std::convert::TryFrom;
use std::path::Path;

use tracing::warn;

use crate::board::Player;
use crate::error::ConfigError;

/// Who holds the current-player marker when a new round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundOpener {
    /// The player whose move ended the round keeps the marker
    LastMover,
    /// The marker passes to the other player, as after any ordinary move
    Alternate,
}

impl Default for RoundOpener {
    fn default() -> Self {
        RoundOpener::LastMover
    }
}

/// Session configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Identifier (1 or 2) of the player who moves first in the session
    pub first_player: u8,
    pub round_opener: RoundOpener,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            first_player: 1,
            round_opener: RoundOpener::default(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.first_player().map(|_| ())
    }

    pub fn first_player(&self) -> Result<Player, ConfigError> {
        Player::try_from(self.first_player)
            .map_err(|e| ConfigError::Validation(format!("first_player: {}", e)))
    }
}
