//! Chess Arena - self-play between the built-in move pickers.
//!
//! Games are played through the [`chess_engine::Game`] boundary, so every
//! move an engine produces is checked by the rule engine before it lands.
//!
//! # Modules
//!
//! - [`config`] - `arena.toml` loading
//! - [`game_runner`] - plays one game between two difficulty tiers
//! - [`json_output`] - JSON export of finished games

pub mod config;
pub mod game_runner;
pub mod json_output;
