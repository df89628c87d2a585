//! Game management for a UI or game loop.
//!
//! The [`Game`] struct is the request/response boundary of the engine:
//! callers ask for the legal destinations of a square, submit from/to
//! attempts and read the status. Rejected attempts never change state.

use crate::legal::legal_moves;
use crate::rules::{GameResult, RuleSet, StandardChess};
use crate::status::{game_status, GameStatus};
use crate::update::{classify_move, MoveKind};
use crate::Position;
use chess_core::{Color, FenError, Move, Piece, Square};
use thiserror::Error;

/// A move that was played, with its derived flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move as played, promotion piece included.
    pub mov: Move,
    /// Castle, en passant, promotion and capture flags.
    pub kind: MoveKind,
}

/// Outcome of [`Game::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played.
    Applied(GameMove),
    /// The move is not legal here; nothing changed.
    Rejected,
    /// The move is a legal promotion but no piece was chosen; nothing changed.
    NeedsPromotionChoice,
}

impl MoveOutcome {
    /// Returns true if the move was played.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Errors from the programmatic move entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The text is not a UCI move.
    #[error("invalid UCI move: {0}")]
    InvalidUci(String),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A chess game: the current position, where it started and what was played.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    start_pos: Position,
    moves: Vec<GameMove>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardChess.initial_position())
    }

    /// Creates a game from a custom starting position.
    ///
    /// A position that is already decided starts with its result set.
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            start_pos: position,
            moves: Vec::new(),
            result: StandardChess.game_result(&position),
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns all legal moves in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        StandardChess.generate_moves(&self.position)
    }

    /// Returns the legal destinations of the piece on `from`.
    ///
    /// Empty when the square is empty, holds a piece of the side not on
    /// move, or the game is over.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.result.is_some() {
            return Vec::new();
        }
        let p = &self.position;
        legal_moves(&p.board, from, p.castling, p.en_passant, p.side_to_move)
    }

    /// Submits a from/to move.
    ///
    /// A promotion needs `promotion` set to a queen, rook, bishop or knight;
    /// without it the attempt asks for a choice. A promotion piece on a move
    /// that does not promote is rejected.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> MoveOutcome {
        if !self.legal_destinations(from).contains(&to) {
            return MoveOutcome::Rejected;
        }
        let Some(plain) = classify_move(&self.position.board, Move::normal(from, to)) else {
            return MoveOutcome::Rejected;
        };

        let mov = match (plain.promotion.is_some(), promotion) {
            (true, None) => return MoveOutcome::NeedsPromotionChoice,
            (true, Some(piece)) if piece.is_promotion_target() => Move::promote(from, to, piece),
            (false, None) => Move::normal(from, to),
            _ => return MoveOutcome::Rejected,
        };
        let kind = MoveKind {
            promotion: mov.promotion().or(plain.promotion),
            ..plain
        };

        MoveOutcome::Applied(self.apply_move(mov, kind))
    }

    /// Plays a fully specified move.
    pub fn make_move(&mut self, m: Move) -> Result<GameMove, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        match classify_move(&self.position.board, m) {
            Some(kind) if StandardChess.is_legal(&self.position, m) => {
                Ok(self.apply_move(m, kind))
            }
            _ => Err(GameError::IllegalMove(m.to_uci())),
        }
    }

    /// Plays a move given in UCI notation.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<GameMove, GameError> {
        let m = Move::from_uci(uci).ok_or_else(|| GameError::InvalidUci(uci.to_string()))?;
        self.make_move(m)
    }

    fn apply_move(&mut self, m: Move, kind: MoveKind) -> GameMove {
        let played = GameMove { mov: m, kind };

        self.moves.push(played);
        self.position = StandardChess.make_move(&self.position, m);
        self.result = StandardChess.game_result(&self.position);
        played
    }

    /// Returns the status of `color` in the current position.
    pub fn status(&self, color: Color) -> GameStatus {
        game_status(&self.position, color)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        StandardChess.is_check(&self.position)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the moves played so far.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }
}
