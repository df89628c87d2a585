//! Property tests over random legal playouts.

use chess_core::{Color, Move, Piece};
use chess_engine::{
    generate_moves, has_legal_moves, in_check, is_checkmate, is_king_attacked, is_stalemate,
    legal_moves, make_move, Position,
};
use proptest::prelude::*;

const FENS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

/// Plays the moves picked by `choices` and returns every position reached,
/// together with the move that led to it.
fn playout(start: usize, choices: &[u16]) -> (Position, Vec<(Position, Move, Position)>) {
    let root = Position::from_fen(FENS[start % FENS.len()]).unwrap();
    let mut position = root;
    let mut steps = Vec::new();
    for &choice in choices {
        let moves = generate_moves(&position);
        if moves.is_empty() {
            break;
        }
        let m = moves[choice as usize % moves.len()];
        let next = make_move(&position, m);
        steps.push((position, m, next));
        position = next;
    }
    (root, steps)
}

fn choices() -> impl Strategy<Value = (usize, Vec<u16>)> {
    (0..FENS.len(), prop::collection::vec(any::<u16>(), 0..40))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn legal_moves_never_leave_own_king_attacked((start, picks) in choices()) {
        let (root, steps) = playout(start, &picks);
        let mut positions = vec![root];
        positions.extend(steps.iter().map(|(_, _, next)| *next));

        for position in positions {
            let mover = position.side_to_move;
            for m in generate_moves(&position) {
                let after = make_move(&position, m);
                prop_assert!(
                    !is_king_attacked(&after.board, mover),
                    "{} leaves the king attacked in {}",
                    m,
                    position.to_fen()
                );
            }
        }
    }

    #[test]
    fn mate_and_stalemate_match_their_definitions((start, picks) in choices()) {
        let (_, steps) = playout(start, &picks);
        for (_, _, position) in steps {
            for color in Color::ALL {
                let b = &position.board;
                let nothing_moves = b.pieces(color).all(|(from, _)| {
                    legal_moves(b, from, position.castling, position.en_passant, color).is_empty()
                });
                let check = in_check(b, color);
                prop_assert_eq!(
                    is_checkmate(b, color, position.castling, position.en_passant),
                    check && nothing_moves
                );
                prop_assert_eq!(
                    is_stalemate(b, color, position.castling, position.en_passant),
                    !check && nothing_moves
                );
                prop_assert_eq!(
                    has_legal_moves(b, color, position.castling, position.en_passant),
                    !nothing_moves
                );
            }
        }
    }

    #[test]
    fn castling_rights_only_shrink((start, picks) in choices()) {
        let (root, steps) = playout(start, &picks);
        for (before, _, after) in &steps {
            prop_assert!(after.castling.is_subset_of(before.castling));
            prop_assert!(after.castling.is_subset_of(root.castling));
        }
    }

    #[test]
    fn en_passant_target_lives_for_one_move((start, picks) in choices()) {
        let (_, steps) = playout(start, &picks);
        for (before, m, after) in steps {
            let double_push = before.board.get(m.from()).map(|(p, _)| p) == Some(Piece::Pawn)
                && m.from().row().abs_diff(m.to().row()) == 2;
            prop_assert_eq!(after.en_passant.is_some(), double_push);
            if let Some(target) = after.en_passant {
                prop_assert_eq!(target.col(), m.to().col());
                prop_assert_eq!(target.row(), (m.from().row() + m.to().row()) / 2);
            }
        }
    }

    #[test]
    fn side_to_move_alternates((start, picks) in choices()) {
        let (_, steps) = playout(start, &picks);
        for (before, _, after) in steps {
            prop_assert_eq!(after.side_to_move, before.side_to_move.opposite());
        }
    }
}
