//! Legal move filtering.
//!
//! Unions the pseudo-legal destinations with castling and en passant
//! candidates, then drops every destination after which the mover's own king
//! would be attacked. Each candidate is tried on a copy of the board.

use crate::movegen::{is_king_attacked, is_square_attacked, pseudo_legal_moves};
use crate::position::{CastlingRights, Position};
use crate::update::{execute_move, CastleSide};
use chess_core::{Board, Color, Move, Piece, Square};

/// Returns the legal destinations of the piece on `from`.
///
/// Empty if the square is empty or holds a piece of the other color.
pub fn legal_moves(
    board: &Board,
    from: Square,
    castling: CastlingRights,
    en_passant: Option<Square>,
    color: Color,
) -> Vec<Square> {
    let piece = match board.get(from) {
        Some((piece, c)) if c == color => piece,
        _ => return Vec::new(),
    };

    let mut candidates = pseudo_legal_moves(board, from);
    match piece {
        Piece::King => candidates.extend(castling_destinations(board, from, castling, color)),
        Piece::Pawn => candidates.extend(en_passant_destination(board, from, en_passant, color)),
        _ => {}
    }

    candidates.retain(|&to| {
        let after = execute_move(board, Move::normal(from, to));
        !is_king_attacked(&after, color)
    });
    candidates
}

/// Returns the castling destinations for the king on `from`.
///
/// The king must stand on its home square and not be in check; the right
/// must be set, the rook must be on its corner, the squares between them
/// must be empty and the square the king crosses must not be attacked.
/// The landing square itself is left to the check-safety filter.
pub fn castling_destinations(
    board: &Board,
    from: Square,
    castling: CastlingRights,
    color: Color,
) -> Vec<Square> {
    let row = color.back_rank();
    if Square::new(row, 4) != Some(from) || board.get(from) != Some((Piece::King, color)) {
        return Vec::new();
    }
    if is_square_attacked(board, from, color) {
        return Vec::new();
    }

    CastleSide::ALL
        .into_iter()
        .filter(|&side| match side {
            CastleSide::Kingside => castling.can_castle_kingside(color),
            CastleSide::Queenside => castling.can_castle_queenside(color),
        })
        .filter(|&side| {
            Square::new(row, side.rook_from_col())
                .is_some_and(|sq| board.get(sq) == Some((Piece::Rook, color)))
        })
        .filter(|&side| {
            side.between_cols()
                .filter_map(|col| Square::new(row, col))
                .all(|sq| board.is_empty(sq))
        })
        .filter(|&side| {
            Square::new(row, side.rook_to_col())
                .is_some_and(|transit| !is_square_attacked(board, transit, color))
        })
        .filter_map(|side| Square::new(row, side.king_to_col()))
        .collect()
}

/// Returns the en passant destination for the pawn on `from`, if any.
///
/// The target must sit one row forward and one column to either side.
pub fn en_passant_destination(
    board: &Board,
    from: Square,
    en_passant: Option<Square>,
    color: Color,
) -> Option<Square> {
    let target = en_passant?;
    if board.get(from) != Some((Piece::Pawn, color)) || !board.is_empty(target) {
        return None;
    }
    let forward = from.row() as i8 + color.pawn_direction();
    (target.row() as i8 == forward && from.col().abs_diff(target.col()) == 1).then_some(target)
}

/// Generates every legal move for the side to move.
///
/// A pawn reaching the last rank yields one move per promotion piece,
/// queen first.
pub fn generate_moves(position: &Position) -> Vec<Move> {
    let color = position.side_to_move;
    let board = &position.board;
    let mut moves = Vec::with_capacity(48);

    for (from, piece) in board.pieces(color) {
        for to in legal_moves(board, from, position.castling, position.en_passant, color) {
            if piece == Piece::Pawn && to.row() == color.promotion_row() {
                moves.extend(
                    Piece::PROMOTIONS
                        .iter()
                        .map(|&promo| Move::promote(from, to, promo)),
                );
            } else {
                moves.push(Move::normal(from, to));
            }
        }
    }

    moves
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_legal_moves(
    board: &Board,
    color: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_moves(board, from, castling, en_passant, color).is_empty())
}

/// Returns true if `m` is among the legal moves of the side to move.
///
/// Promotion moves must name their piece.
pub fn is_legal(position: &Position, m: Move) -> bool {
    generate_moves(position).contains(&m)
}
