//! Game execution between two difficulty tiers.
//!
//! This module provides the [`GameRunner`] struct for playing single games
//! and the records a finished game produces. Moves are chosen by
//! [`chess_ai::choose_move`] and submitted through [`Game::make_move`], so
//! the rule engine validates every one of them.

use crate::config::{ArenaConfig, ConfigError};
use chess_ai::{choose_move, Difficulty, SearchConfig};
use chess_core::{Color, Piece};
use chess_engine::{
    CastleSide, DrawReason, Game, GameError, GameMove, GameResult as EngineResult, Position,
};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while playing a game.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The side to move had no move although the game was not over.
    #[error("{0} found no move in an unfinished game")]
    NoMove(Difficulty),
    /// The engine produced a move the rules rejected.
    #[error("Engine produced an illegal move: {0}")]
    IllegalMove(#[from] GameError),
}

/// A single move of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// The move in UCI notation (e.g., "e2e4", "e7e8q").
    pub uci: String,
    /// FEN letter of the captured piece, lowercase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<char>,
    /// "O-O" or "O-O-O" for castling moves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub castle: Option<&'static str>,
    /// True for en passant captures.
    pub en_passant: bool,
    /// FEN letter of the promotion piece, lowercase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<char>,
}

impl From<GameMove> for MoveRecord {
    fn from(played: GameMove) -> Self {
        let kind = played.kind;
        MoveRecord {
            uci: played.mov.to_uci(),
            captured: kind.captured.map(Piece::letter),
            castle: kind.castle.map(|side| match side {
                CastleSide::Kingside => "O-O",
                CastleSide::Queenside => "O-O-O",
            }),
            en_passant: kind.en_passant,
            promotion: kind.promotion.map(Piece::letter),
        }
    }
}

/// The outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// White won the game.
    WhiteWins,
    /// Black won the game.
    BlackWins,
    /// The game ended in a draw or was abandoned at the ply limit.
    Draw,
}

impl MatchResult {
    /// Returns "white", "black" or "draw".
    pub fn as_str(self) -> &'static str {
        match self {
            MatchResult::WhiteWins => "white",
            MatchResult::BlackWins => "black",
            MatchResult::Draw => "draw",
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    /// The ply limit was reached before the game was decided.
    PlyLimit,
}

impl From<Option<EngineResult>> for Termination {
    fn from(result: Option<EngineResult>) -> Self {
        match result {
            Some(EngineResult::WhiteWins | EngineResult::BlackWins) => Termination::Checkmate,
            Some(EngineResult::Draw(DrawReason::Stalemate)) => Termination::Stalemate,
            Some(EngineResult::Draw(DrawReason::InsufficientMaterial)) => {
                Termination::InsufficientMaterial
            }
            None => Termination::PlyLimit,
        }
    }
}

/// The complete record of a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Tier that played white.
    pub white: Difficulty,
    /// Tier that played black.
    pub black: Difficulty,
    /// All moves played, in order.
    pub moves: Vec<MoveRecord>,
    /// The outcome.
    pub result: MatchResult,
    /// Why the game stopped.
    pub termination: Termination,
    /// FEN of the starting position.
    pub start_fen: String,
    /// FEN of the final position.
    pub final_fen: String,
}

/// Plays games between two tiers from a fixed starting position.
///
/// # Example
///
/// ```
/// use chess_ai::Difficulty;
/// use chess_arena::config::ArenaConfig;
/// use chess_arena::game_runner::GameRunner;
/// use rand::SeedableRng;
///
/// let config = ArenaConfig {
///     white: Difficulty::Minimax,
///     max_plies: 20,
///     ..ArenaConfig::default()
/// };
/// let runner = GameRunner::new(&config).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let record = runner.play_game(&mut rng).unwrap();
/// assert!(record.moves.len() <= 20);
/// ```
#[derive(Debug, Clone)]
pub struct GameRunner {
    white: Difficulty,
    black: Difficulty,
    search: SearchConfig,
    start: Position,
    max_plies: usize,
}

impl GameRunner {
    /// Creates a runner from the arena configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFen`] if the configured start position
    /// does not parse.
    pub fn new(config: &ArenaConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            white: config.white,
            black: config.black,
            search: config.search,
            start: config.start_position()?,
            max_plies: config.max_plies,
        })
    }

    /// Plays one game until it is decided or the ply limit is reached.
    ///
    /// The random tier draws from `rng`; the search tiers are deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if a tier fails to produce a legal move.
    pub fn play_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameRecord, RunnerError> {
        let mut game = Game::from_position(self.start);
        let mut moves: Vec<MoveRecord> = Vec::new();

        info!(white = %self.white, black = %self.black, fen = %game.to_fen(), "game started");

        while !game.is_game_over() {
            if game.ply_count() >= self.max_plies {
                warn!(plies = game.ply_count(), "ply limit reached, scoring as a draw");
                break;
            }

            let difficulty = match game.side_to_move() {
                Color::White => self.white,
                Color::Black => self.black,
            };
            let m = choose_move(game.position(), difficulty, &self.search, rng)
                .ok_or(RunnerError::NoMove(difficulty))?;
            let played = game.make_move(m)?;
            moves.push(MoveRecord::from(played));
        }

        let result = match game.result() {
            Some(EngineResult::WhiteWins) => MatchResult::WhiteWins,
            Some(EngineResult::BlackWins) => MatchResult::BlackWins,
            Some(EngineResult::Draw(_)) | None => MatchResult::Draw,
        };
        let termination = Termination::from(game.result());

        info!(
            result = result.as_str(),
            termination = ?termination,
            plies = moves.len(),
            "game finished"
        );

        Ok(GameRecord {
            white: self.white,
            black: self.black,
            moves,
            result,
            termination,
            start_fen: game.start_position().to_fen(),
            final_fen: game.to_fen(),
        })
    }
}
