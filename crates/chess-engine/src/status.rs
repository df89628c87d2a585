//! Check, checkmate, stalemate and material draw detection.

use crate::legal::has_legal_moves;
use crate::movegen::is_king_attacked;
use crate::position::{CastlingRights, Position};
use chess_core::{Board, Color, Piece, Square};

/// Status of one side in a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Nothing special.
    Ongoing,
    /// The side's king is attacked but it has a legal reply.
    Check,
    /// The side's king is attacked and it has no legal move.
    Checkmate,
    /// The side is not in check and has no legal move.
    Stalemate,
    /// Neither side can force mate.
    InsufficientMaterial,
}

impl GameStatus {
    /// Returns true for checkmate, stalemate and material draws.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::InsufficientMaterial
        )
    }
}

/// Returns true if the king of `color` is attacked.
///
/// A side without a king is reported in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    is_king_attacked(board, color)
}

/// Returns true if `color` is in check and no piece of it can move.
pub fn is_checkmate(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
) -> bool {
    in_check(board, color) && !has_legal_moves(board, color, castling, en_passant)
}

/// Returns true if `color` is not in check and no piece of it can move.
pub fn is_stalemate(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
) -> bool {
    !in_check(board, color) && !has_legal_moves(board, color, castling, en_passant)
}

/// Returns true if neither side has the material to force mate.
///
/// Recognised: king against king, a single knight or bishop against a bare
/// king, and one bishop each on squares of the same color.
pub fn is_insufficient_material(board: &Board) -> bool {
    let minors = |color: Color| -> Vec<(Square, Piece)> {
        board
            .pieces(color)
            .filter(|&(_, piece)| piece != Piece::King)
            .collect()
    };
    let white = minors(Color::White);
    let black = minors(Color::Black);

    match (white.as_slice(), black.as_slice()) {
        ([], []) => true,
        ([(_, Piece::Knight | Piece::Bishop)], []) | ([], [(_, Piece::Knight | Piece::Bishop)]) => {
            true
        }
        ([(w, Piece::Bishop)], [(b, Piece::Bishop)]) => w.is_dark() == b.is_dark(),
        _ => false,
    }
}

/// Classifies the position from the point of view of `color`.
///
/// Checkmate and stalemate take precedence over a material draw.
pub fn game_status(position: &Position, color: Color) -> GameStatus {
    let board = &position.board;
    let check = in_check(board, color);
    let can_move = has_legal_moves(board, color, position.castling, position.en_passant);

    match (check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        _ if is_insufficient_material(board) => GameStatus::InsufficientMaterial,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}
