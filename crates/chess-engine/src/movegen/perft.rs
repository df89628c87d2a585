//! Perft leaf counting.
//!
//! Walks the legal move tree to a fixed depth and counts the leaves. The
//! totals for well-known positions are published, so any disagreement points
//! at a generator or move execution bug.

use crate::legal::generate_moves;
use crate::update::make_move;
use crate::Position;

/// Counts the leaf nodes of the legal move tree at `depth`.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| perft(&make_move(position, m), depth - 1))
        .sum()
}

/// Splits the perft count by root move, sorted by UCI text.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = generate_moves(position)
        .into_iter()
        .map(|m| {
            let nodes = perft(&make_move(position, m), depth.saturating_sub(1));
            (m.to_uci(), nodes)
        })
        .collect();
    results.sort();
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 0 1";

    fn check(fen: &str, expected: &[u64]) {
        let position = Position::from_fen(fen).unwrap();
        for (depth, &nodes) in (1..).zip(expected) {
            assert_eq!(perft(&position, depth), nodes, "{} at depth {}", fen, depth);
        }
    }

    #[test]
    fn startpos() {
        check(chess_core::FenParser::STARTPOS, &[20, 400, 8902]);
    }

    // Slow in debug builds.
    #[test]
    #[ignore]
    fn startpos_depth_4() {
        assert_eq!(perft(&Position::startpos(), 4), 197_281);
    }

    // Castling both ways, en passant and pins.
    #[test]
    fn kiwipete() {
        check(KIWIPETE, &[48, 2039]);
    }

    #[test]
    #[ignore]
    fn kiwipete_depth_3() {
        check(KIWIPETE, &[48, 2039, 97_862]);
    }

    // En passant that would uncover a rank check.
    #[test]
    fn position_3() {
        check(POSITION_3, &[14, 191, 2812]);
    }

    // Promotions and captured rooks on their home squares.
    #[test]
    fn position_4() {
        check(POSITION_4, &[6, 264, 9467]);
    }

    #[test]
    fn position_5() {
        check(POSITION_5, &[44, 1486]);
    }

    #[test]
    #[ignore]
    fn position_5_depth_3() {
        check(POSITION_5, &[44, 1486, 62_379]);
    }

    #[test]
    fn divide_sums_to_perft() {
        let position = Position::from_fen(KIWIPETE).unwrap();
        let split = perft_divide(&position, 2);
        assert_eq!(split.len(), 48);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2039);
        assert!(split.iter().any(|(uci, _)| uci == "e1g1"));
        assert!(split.iter().any(|(uci, _)| uci == "e1c1"));
    }

    #[test]
    fn divide_at_depth_one_counts_each_move_once() {
        let split = perft_divide(&Position::startpos(), 1);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|(_, n)| *n == 1));
    }
}
