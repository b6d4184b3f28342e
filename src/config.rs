use std::path::Path;

use crate::ai::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Which kind of player occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Minimax,
    AlphaBeta,
    Random,
}

impl PlayerKind {
    /// Parse a kind name as written in config files and on the command line.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "human" => Ok(PlayerKind::Human),
            "minimax" => Ok(PlayerKind::Minimax),
            "alphabeta" => Ok(PlayerKind::AlphaBeta),
            "random" => Ok(PlayerKind::Random),
            other => Err(ConfigError::Validation(format!(
                "unknown player kind '{other}' (expected human, minimax, alphabeta or random)"
            ))),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Plies searched below the root.
    pub depth: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: PlayerKind,
    pub yellow: PlayerKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::AlphaBeta,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchSettings,
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
        if self.board.height < 4 {
            return Err(ConfigError::Validation(
                "board.height must be >= 4".into(),
            ));
        }
        if self.board.width < 4 {
            return Err(ConfigError::Validation("board.width must be >= 4".into()));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be > 0".into()));
        }
        Ok(())
    }
}
