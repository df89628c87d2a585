//! Difficulty tiers and search depths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the automated side picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Random,
    /// Full-width minimax.
    Minimax,
    /// Minimax with alpha-beta pruning, searched deeper.
    #[default]
    AlphaBeta,
}

impl Difficulty {
    /// Returns the difficulty for tier 0, 1 or 2.
    pub const fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            0 => Some(Difficulty::Random),
            1 => Some(Difficulty::Minimax),
            2 => Some(Difficulty::AlphaBeta),
            _ => None,
        }
    }

    /// Returns the numeric tier.
    pub const fn tier(self) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Minimax => 1,
            Difficulty::AlphaBeta => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::Minimax => "minimax",
            Difficulty::AlphaBeta => "alpha-beta",
        };
        f.write_str(name)
    }
}

/// Error returned when a difficulty name or tier is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown difficulty '{0}': expected random, minimax, alpha-beta or 0-2")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "0" => Ok(Difficulty::Random),
            "minimax" | "1" => Ok(Difficulty::Minimax),
            "alpha-beta" | "alphabeta" | "2" => Ok(Difficulty::AlphaBeta),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// Search depths per tier, in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_minimax_depth")]
    pub minimax_depth: u32,

    #[serde(default = "default_alpha_beta_depth")]
    pub alpha_beta_depth: u32,
}

fn default_minimax_depth() -> u32 {
    2
}

fn default_alpha_beta_depth() -> u32 {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimax_depth: default_minimax_depth(),
            alpha_beta_depth: default_alpha_beta_depth(),
        }
    }
}

impl SearchConfig {
    /// Returns the depth searched by `difficulty`, or `None` for the random tier.
    pub fn depth_for(&self, difficulty: Difficulty) -> Option<u32> {
        match difficulty {
            Difficulty::Random => None,
            Difficulty::Minimax => Some(self.minimax_depth),
            Difficulty::AlphaBeta => Some(self.alpha_beta_depth),
        }
    }
}
