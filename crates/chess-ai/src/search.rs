//! Minimax and alpha-beta search.
//!
//! Both searches walk the same tree: plies alternate between the searching
//! color (maximizing) and its opponent (minimizing), and every score is
//! expressed from the searching color's point of view. Game ends are
//! detected at every node before the depth check, so a mate on the last ply
//! still scores as a mate.

use crate::evaluate::{evaluate, MATE_SCORE};
use chess_core::{Color, Move};
use chess_engine::{generate_moves, in_check, is_insufficient_material, make_move, Position};
use tracing::debug;

/// Bound wider than any reachable score.
const INFINITY: i32 = i32::MAX;

/// Best move found by a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move.
    pub best_move: Move,
    /// Its score for the side that searched.
    pub score: i32,
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// Search state: the searching color and a node counter.
#[derive(Debug)]
struct Searcher {
    color: Color,
    nodes: u64,
}

enum Node {
    Terminal(i32),
    Inner(Vec<Move>),
}

impl Searcher {
    fn new(color: Color) -> Self {
        Searcher { color, nodes: 0 }
    }

    /// Scores game ends and exhausted depth; otherwise hands back the moves.
    fn expand(&mut self, position: &Position, depth: u32, maximizing: bool) -> Node {
        self.nodes += 1;

        let moves = generate_moves(position);
        if moves.is_empty() {
            return Node::Terminal(if in_check(&position.board, position.side_to_move) {
                if maximizing {
                    -MATE_SCORE
                } else {
                    MATE_SCORE
                }
            } else {
                0
            });
        }
        if is_insufficient_material(&position.board) {
            return Node::Terminal(0);
        }
        if depth == 0 {
            return Node::Terminal(evaluate(&position.board, self.color));
        }
        Node::Inner(moves)
    }

    fn minimax(&mut self, position: &Position, depth: u32, maximizing: bool) -> i32 {
        let moves = match self.expand(position, depth, maximizing) {
            Node::Terminal(score) => return score,
            Node::Inner(moves) => moves,
        };

        let scores = moves
            .into_iter()
            .map(|m| self.minimax(&make_move(position, m), depth - 1, !maximizing));
        if maximizing {
            scores.fold(-INFINITY, i32::max)
        } else {
            scores.fold(INFINITY, i32::min)
        }
    }

    fn alpha_beta(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        let moves = match self.expand(position, depth, maximizing) {
            Node::Terminal(score) => return score,
            Node::Inner(moves) => moves,
        };

        if maximizing {
            let mut best = -INFINITY;
            for m in moves {
                let child = make_move(position, m);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for m in moves {
                let child = make_move(position, m);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Searches `depth` plies with plain minimax for the side to move.
///
/// Keeps the first move with the highest score. A depth of zero searches
/// one ply. Returns `None` when the side to move has no legal move.
pub fn minimax_root(position: &Position, depth: u32) -> Option<SearchResult> {
    let depth = depth.max(1);
    let mut searcher = Searcher::new(position.side_to_move);
    searcher.nodes += 1;

    let mut best: Option<(Move, i32)> = None;
    for m in generate_moves(position) {
        let score = searcher.minimax(&make_move(position, m), depth - 1, false);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((m, score));
        }
    }

    let result = best.map(|(best_move, score)| SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    });
    if let Some(r) = &result {
        debug!(
            depth,
            score = r.score,
            nodes = r.nodes,
            best = %r.best_move,
            "minimax search done"
        );
    }
    result
}

/// Searches `depth` plies with alpha-beta pruning for the side to move.
///
/// Returns the same score as [`minimax_root`] at the same depth, visiting
/// at most as many nodes.
pub fn alpha_beta_root(position: &Position, depth: u32) -> Option<SearchResult> {
    let depth = depth.max(1);
    let mut searcher = Searcher::new(position.side_to_move);
    searcher.nodes += 1;

    let mut alpha = -INFINITY;
    let mut best: Option<(Move, i32)> = None;
    for m in generate_moves(position) {
        let child = make_move(position, m);
        let score = searcher.alpha_beta(&child, depth - 1, alpha, INFINITY, false);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((m, score));
            alpha = alpha.max(score);
        }
    }

    let result = best.map(|(best_move, score)| SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    });
    if let Some(r) = &result {
        debug!(
            depth,
            score = r.score,
            nodes = r.nodes,
            best = %r.best_move,
            "alpha-beta search done"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn finds_back_rank_mate() {
        let p = pos("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        for result in [minimax_root(&p, 1), alpha_beta_root(&p, 1)] {
            let result = result.unwrap();
            assert_eq!(result.best_move.to_uci(), "a1a8");
            assert_eq!(result.score, MATE_SCORE);
        }
    }

    #[test]
    fn mate_on_the_last_ply_is_seen_at_depth_two() {
        let p = pos("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let result = alpha_beta_root(&p, 2).unwrap();
        assert_eq!(result.best_move.to_uci(), "a1a8");
        assert_eq!(result.score, MATE_SCORE);
    }

    #[test]
    fn takes_the_hanging_queen() {
        let p = pos("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        let minimax = minimax_root(&p, 2).unwrap();
        assert_eq!(minimax.best_move.to_uci(), "d2d5");
        let pruned = alpha_beta_root(&p, 2).unwrap();
        assert_eq!(pruned.best_move, minimax.best_move);
        assert_eq!(pruned.score, minimax.score);
    }

    #[test]
    fn black_searches_for_black() {
        // The rook on d2 is loose: the white king on a1 cannot recapture.
        let p = pos("4k3/8/8/3q4/8/8/3R4/K7 b - - 0 1");
        let result = alpha_beta_root(&p, 2).unwrap();
        assert_eq!(result.best_move.to_uci(), "d5d2");
        assert!(result.score > 0);
    }

    #[test]
    fn pruning_matches_minimax_and_visits_fewer_nodes() {
        let p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        let minimax = minimax_root(&p, 3).unwrap();
        let pruned = alpha_beta_root(&p, 3).unwrap();
        assert_eq!(pruned.score, minimax.score);
        assert_eq!(pruned.best_move, minimax.best_move);
        assert!(pruned.nodes < minimax.nodes);
    }

    #[test]
    fn no_moves_no_result() {
        let stalemate = pos("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1");
        assert!(minimax_root(&stalemate, 2).is_none());
        assert!(alpha_beta_root(&stalemate, 3).is_none());
    }

    #[test]
    fn avoids_stalemating_when_winning() {
        // Qc7 would stalemate; anything that keeps the game going scores higher.
        let p = pos("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1");
        let result = alpha_beta_root(&p, 1).unwrap();
        assert_ne!(result.best_move.to(), Square::from_algebraic("c7").unwrap());
        assert!(result.score > 0);
    }

    #[test]
    fn zero_depth_searches_one_ply() {
        let p = Position::startpos();
        let result = minimax_root(&p, 0).unwrap();
        // Root plus twenty leaves.
        assert_eq!(result.nodes, 21);
    }
}
