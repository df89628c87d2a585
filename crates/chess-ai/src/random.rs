//! Uniformly random move selection.

use chess_core::Move;
use chess_engine::{generate_moves, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Picks one legal move for the side to move, uniformly at random.
///
/// Returns `None` when there is no legal move.
pub fn random_move<R: Rng + ?Sized>(position: &Position, rng: &mut R) -> Option<Move> {
    let moves = generate_moves(position);
    let choice = moves.choose(rng).copied();
    if let Some(m) = choice {
        trace!(candidates = moves.len(), chosen = %m, "random move");
    }
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn picks_legal_moves() {
        let position = Position::startpos();
        let legal = generate_moves(&position);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let m = random_move(&position, &mut rng).unwrap();
            assert!(legal.contains(&m));
        }
    }

    #[test]
    fn spreads_over_the_moves() {
        let position = Position::startpos();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Move> = (0..400)
            .filter_map(|_| random_move(&position, &mut rng))
            .collect();
        assert!(seen.len() > 10);
    }

    #[test]
    fn same_seed_same_move() {
        let position = Position::startpos();
        let a = random_move(&position, &mut StdRng::seed_from_u64(3));
        let b = random_move(&position, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn no_moves_returns_none() {
        let mated =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_move(&mated, &mut rng), None);
    }
}
