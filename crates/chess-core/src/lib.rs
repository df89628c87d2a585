//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rule engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is Black's back rank)
//! - [`Move`] for move representation
//! - [`Board`], the fixed 8x8 grid of optional pieces
//! - FEN and piece-placement parsing and serialization

mod board;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use fen::{FenError, FenParser};
pub use mov::Move;
pub use piece::Piece;
pub use square::Square;
