//! Move selection for the automated side.
//!
//! Three tiers share one entry point, [`choose_move`]:
//! - [`Difficulty::Random`] - a uniformly random legal move
//! - [`Difficulty::Minimax`] - full-width minimax to [`SearchConfig::minimax_depth`]
//! - [`Difficulty::AlphaBeta`] - alpha-beta to [`SearchConfig::alpha_beta_depth`]
//!
//! Searches are plain recursive functions over [`Position`] values. They run
//! synchronously on the caller's thread and never touch the caller's state.
//!
//! # Example
//!
//! ```
//! use chess_ai::{choose_move, Difficulty, SearchConfig};
//! use chess_engine::Position;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let position = Position::startpos();
//! let m = choose_move(&position, Difficulty::Minimax, &SearchConfig::default(), &mut rng);
//! assert!(m.is_some());
//! ```

mod config;
pub mod evaluate;
mod random;
pub mod search;

pub use config::{Difficulty, SearchConfig, UnknownDifficulty};
pub use evaluate::{evaluate, MATE_SCORE, PAWN_UNIT};
pub use random::random_move;
pub use search::{alpha_beta_root, minimax_root, SearchResult};

use chess_core::Move;
use chess_engine::Position;
use rand::Rng;

/// Picks a move for the side to move at the given difficulty.
///
/// Returns `None` when the side to move has no legal move.
pub fn choose_move<R: Rng + ?Sized>(
    position: &Position,
    difficulty: Difficulty,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<Move> {
    match difficulty {
        Difficulty::Random => random_move(position, rng),
        Difficulty::Minimax => minimax_root(position, config.minimax_depth).map(|r| r.best_move),
        Difficulty::AlphaBeta => {
            alpha_beta_root(position, config.alpha_beta_depth).map(|r| r.best_move)
        }
    }
}
