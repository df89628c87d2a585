//! Static evaluation.
//!
//! Scores are in centipawns from the point of view of one color: positive is
//! good for that color. The terms are material, king placement, occupation
//! of the four center squares and a piece-count stand-in for mobility.

use chess_core::{Board, Color, Square};

/// One pawn.
pub const PAWN_UNIT: i32 = 100;

/// Score of a checkmate, worth ten thousand pawns.
pub const MATE_SCORE: i32 = 10_000 * PAWN_UNIT;

/// Center occupation counts 0.3 of the occupant's value.
const CENTER_WEIGHT: i32 = 3 * PAWN_UNIT / 10;

/// Each own piece counts 0.1 of a pawn.
const MOBILITY_PER_PIECE: i32 = PAWN_UNIT / 10;

/// King on the c- or g-file, where castling puts it.
const CASTLED_KING_BONUS: i32 = PAWN_UNIT / 2;

/// King inside the central box of rows and columns 2 to 5.
const CENTRAL_KING_PENALTY: i32 = 3 * PAWN_UNIT / 10;

const CENTER: [(u8, u8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// Evaluates `board` from the point of view of `perspective`.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let sign = |color: Color| if color == perspective { 1 } else { -1 };

    let material: i32 = Color::ALL
        .into_iter()
        .flat_map(move |color| board.pieces(color).map(move |(_, piece)| (piece, color)))
        .map(|(piece, color)| sign(color) * piece.value() * PAWN_UNIT)
        .sum();

    let king_safety: i32 = Color::ALL
        .into_iter()
        .filter_map(|color| board.king_square(color).map(|sq| sign(color) * king_placement(sq)))
        .sum();

    let center: i32 = CENTER
        .iter()
        .filter_map(|&(row, col)| board.get_rc(row, col))
        .map(|(piece, color)| sign(color) * piece.value() * CENTER_WEIGHT)
        .sum();

    let mobility = board.count(perspective) as i32 * MOBILITY_PER_PIECE;

    material + king_safety + center + mobility
}

fn king_placement(sq: Square) -> i32 {
    let mut score = 0;
    if sq.col() == 2 || sq.col() == 6 {
        score += CASTLED_KING_BONUS;
    }
    if (2..=5).contains(&sq.row()) && (2..=5).contains(&sq.col()) {
        score -= CENTRAL_KING_PENALTY;
    }
    score
}
