//! Chess rules engine.
//!
//! This crate provides:
//! - [`Position`] - board plus side to move, castling rights and en passant target
//! - Pseudo-legal move generation and attack detection ([`movegen`])
//! - Legal move filtering with castling, en passant and promotion ([`legal`])
//! - Move execution and the state that changes with it ([`update`])
//! - Check, checkmate, stalemate and material draw detection ([`status`])
//! - [`Game`] - request/response boundary for a UI or game loop
//! - [`RuleSet`] - the rule operations a game loop needs
//!
//! Every operation works on values: boards and positions are `Copy`, and
//! playing a move returns a new [`Position`].
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::{Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert_eq!(game.legal_destinations(e2).len(), 2);
//! assert!(game.attempt_move(e2, e4, None).is_applied());
//! assert_ne!(game.attempt_move(e2, e4, None), MoveOutcome::NeedsPromotionChoice);
//! ```

mod game;
pub mod legal;
pub mod movegen;
mod position;
pub mod rules;
pub mod status;
pub mod update;

pub use game::{Game, GameError, GameMove, MoveOutcome};
pub use legal::{generate_moves, has_legal_moves, is_legal, legal_moves};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{is_king_attacked, is_square_attacked, pseudo_legal_moves};
pub use position::{CastlingRights, Position};
pub use rules::{DrawReason, GameResult, RuleSet, StandardChess};
pub use status::{
    game_status, in_check, is_checkmate, is_insufficient_material, is_stalemate, GameStatus,
};
pub use update::{
    classify_move, execute_move, make_move, revoke_captured_rook, update_castling_rights,
    update_en_passant_target, CastleSide, MoveKind,
};
