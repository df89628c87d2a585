//! Attack detection.
//!
//! Looks outward from the target square using the generator's own offset
//! and ray tables: a piece attacks the square exactly when the square is
//! one of its pseudo-legal destinations (pawns by their diagonals only).

use super::{first_blocker, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use chess_core::{Board, Color, Piece, Square};

/// Returns true if any piece of the side opposing `defender` attacks `sq`.
///
/// Pawn attacks are tested abstractly: the diagonal counts whether or not
/// anything stands on `sq`.
pub fn is_square_attacked(board: &Board, sq: Square, defender: Color) -> bool {
    let attacker = defender.opposite();

    // A pawn attacks `sq` from one row behind it, relative to its own direction.
    let pawn_row = -attacker.pawn_direction();
    if [-1i8, 1]
        .into_iter()
        .filter_map(|d_col| sq.offset(pawn_row, d_col))
        .any(|from| board.get(from) == Some((Piece::Pawn, attacker)))
    {
        return true;
    }

    let hits = |offsets: &[(i8, i8)], piece: Piece| {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| sq.offset(d_row, d_col))
            .any(|from| board.get(from) == Some((piece, attacker)))
    };
    if hits(&KNIGHT_OFFSETS, Piece::Knight) || hits(&KING_OFFSETS, Piece::King) {
        return true;
    }

    let slides = |directions: &[(i8, i8)], slider: Piece| {
        directions.iter().any(|&dir| {
            matches!(
                first_blocker(board, sq, dir),
                Some((_, piece, color)) if color == attacker && (piece == slider || piece == Piece::Queen)
            )
        })
    };
    slides(&ROOK_DIRECTIONS, Piece::Rook) || slides(&BISHOP_DIRECTIONS, Piece::Bishop)
}

/// Returns true if the king of the given color is attacked.
///
/// A board without that king counts as attacked, so positions that lost
/// their king are always treated as unsafe.
pub fn is_king_attacked(board: &Board, king_color: Color) -> bool {
    match board.king_square(king_color) {
        Some(king_sq) => is_square_attacked(board, king_sq, king_color),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::pseudo_legal_moves;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    #[test]
    fn startpos_pawn_cover() {
        let b = Board::startpos();
        // e3 is covered by white pawns, so it is attacked when Black defends it.
        assert!(is_square_attacked(&b, sq("e3"), Color::Black));
        assert!(!is_square_attacked(&b, sq("e4"), Color::Black));
        assert!(is_square_attacked(&b, sq("f6"), Color::White));
    }

    #[test]
    fn pawn_attacks_empty_diagonal_but_not_forward() {
        let b = board("4k3/8/8/8/8/8/4P3/K7");
        assert!(is_square_attacked(&b, sq("d3"), Color::Black));
        assert!(is_square_attacked(&b, sq("f3"), Color::Black));
        assert!(!is_square_attacked(&b, sq("e3"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked() {
        // Rook on a1 sees along the first rank until the knight on c1.
        let b = board("4k3/8/8/8/8/8/8/R1N4K");
        assert!(is_square_attacked(&b, sq("b1"), Color::Black));
        assert!(is_square_attacked(&b, sq("a8"), Color::Black));
        assert!(!is_square_attacked(&b, sq("d1"), Color::Black));
    }

    #[test]
    fn queen_attacks_both_ways() {
        let b = board("4k3/8/8/8/3q4/8/8/4K3");
        assert!(is_square_attacked(&b, sq("d1"), Color::White));
        assert!(is_square_attacked(&b, sq("g1"), Color::White));
        assert!(!is_square_attacked(&b, sq("e2"), Color::White));
    }

    #[test]
    fn king_in_check_from_queen_on_file() {
        // Black queen on a1, white king on e1, nothing between.
        let b = board("4k3/8/8/8/8/8/8/q3K3");
        assert!(is_king_attacked(&b, Color::White));
        assert!(!is_king_attacked(&b, Color::Black));
    }

    #[test]
    fn missing_king_counts_as_attacked() {
        let b = board("4k3/8/8/8/8/8/8/8");
        assert!(is_king_attacked(&b, Color::White));
        assert!(!is_king_attacked(&b, Color::Black));
    }

    #[test]
    fn agrees_with_generator_on_every_empty_square() {
        let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
        for target in Square::all().filter(|&s| b.is_empty(s)) {
            for defender in Color::ALL {
                let attacker = defender.opposite();
                let expected = b.pieces(attacker).any(|(from, piece)| {
                    if piece == Piece::Pawn {
                        crate::movegen::pawn_attack_squares(from, attacker).any(|s| s == target)
                    } else {
                        pseudo_legal_moves(&b, from).contains(&target)
                    }
                });
                assert_eq!(
                    is_square_attacked(&b, target, defender),
                    expected,
                    "{} defended by {}",
                    target,
                    defender
                );
            }
        }
    }
}
