//! Pseudo-legal move generation.
//!
//! Destinations produced here follow each piece's movement pattern and
//! respect occupancy, but ignore whether the mover's king ends up attacked.
//! Castling and en passant are composed on top by [`crate::legal`].

mod attacks;
pub mod perft;

use chess_core::{Board, Color, Piece, Square};

pub use attacks::{is_king_attacked, is_square_attacked};

/// Knight jumps as (row, col) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as (row, col) deltas.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal ray directions (rook, queen).
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions (bishop, queen).
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the pseudo-legal destinations of the piece on `from`.
///
/// An empty square yields an empty list.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut targets = Vec::new();
    let Some((piece, color)) = board.get(from) else {
        return targets;
    };

    match piece {
        Piece::Pawn => pawn_moves(board, from, color, &mut targets),
        Piece::Knight => step_moves(board, from, color, &KNIGHT_OFFSETS, &mut targets),
        Piece::Bishop => slide_moves(board, from, color, &BISHOP_DIRECTIONS, &mut targets),
        Piece::Rook => slide_moves(board, from, color, &ROOK_DIRECTIONS, &mut targets),
        Piece::Queen => {
            slide_moves(board, from, color, &ROOK_DIRECTIONS, &mut targets);
            slide_moves(board, from, color, &BISHOP_DIRECTIONS, &mut targets);
        }
        Piece::King => step_moves(board, from, color, &KING_OFFSETS, &mut targets),
    }

    targets
}

/// Returns the two diagonal squares a pawn of `color` on `from` attacks,
/// whether or not anything stands on them.
pub fn pawn_attack_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

/// Generates pawn pushes and diagonal captures. En passant is not included.
fn pawn_moves(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        targets.push(one);
        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
                targets.push(two);
            }
        }
    }

    for to in pawn_attack_squares(from, color) {
        if board.color_at(to) == Some(color.opposite()) {
            targets.push(to);
        }
    }
}

/// Generates single-step moves from a fixed offset table (knight, king).
fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if board.color_at(to) != Some(color) {
                targets.push(to);
            }
        }
    }
}

/// Casts rays until the edge, a friendly piece (excluded) or an enemy
/// piece (included).
fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.color_at(to) {
                None => targets.push(to),
                Some(c) if c != color => {
                    targets.push(to);
                    break;
                }
                Some(_) => break,
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Returns the first occupied square along a ray, with its piece.
pub(crate) fn first_blocker(
    board: &Board,
    from: Square,
    (d_row, d_col): (i8, i8),
) -> Option<(Square, Piece, Color)> {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(sq) = cursor {
        if let Some((piece, color)) = board.get(sq) {
            return Some((sq, piece, color));
        }
        cursor = sq.offset(d_row, d_col);
    }
    None
}
