//! Configuration file loading for the arena.
//!
//! Every field is optional; an empty or missing `arena.toml` plays ten
//! alpha-beta vs random games from the standard starting position.

use chess_ai::{Difficulty, SearchConfig};
use chess_core::FenError;
use chess_engine::Position;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured starting FEN does not parse.
    #[error("Invalid start position: {0}")]
    InvalidFen(#[from] FenError),
}

/// Arena settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArenaConfig {
    /// Tier playing white. Defaults to alpha-beta.
    #[serde(default = "default_white")]
    pub white: Difficulty,
    /// Tier playing black. Defaults to random.
    #[serde(default = "default_black")]
    pub black: Difficulty,
    /// Number of games in a run. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Half-moves after which an unfinished game is abandoned as a draw.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    /// Starting position in FEN. Defaults to the standard setup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fen: Option<String>,
    /// Seed for the random tier; unseeded runs draw from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Directory for per-game JSON records. Nothing is written when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_dir: Option<PathBuf>,
    /// Search depths shared by both sides.
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_white() -> Difficulty {
    Difficulty::AlphaBeta
}

fn default_black() -> Difficulty {
    Difficulty::Random
}

fn default_games() -> u32 {
    10
}

fn default_max_plies() -> usize {
    200
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            white: default_white(),
            black: default_black(),
            games: default_games(),
            max_plies: default_max_plies(),
            start_fen: None,
            seed: None,
            json_dir: None,
            search: SearchConfig::default(),
        }
    }
}

impl ArenaConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// See [`Self::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the configuration from `path`, or the defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file: `arena.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Returns the position every game starts from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFen`] if `start_fen` does not parse.
    pub fn start_position(&self) -> Result<Position, ConfigError> {
        match &self.start_fen {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }
}
