//! JSON file generation for finished games.
//!
//! Each file holds one game: both tiers, the result, why the game stopped,
//! the start and final positions and the full move list with derived flags.

use crate::game_runner::{GameRecord, MoveRecord, Termination};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct GameJson<'a> {
    id: &'a str,
    white: String,
    black: String,
    /// "white", "black" or "draw".
    result: &'a str,
    termination: Termination,
    start_fen: &'a str,
    final_fen: &'a str,
    /// Piece placement of the final position.
    final_placement: &'a str,
    moves: &'a [MoveRecord],
}

/// Writes a finished game to a JSON file.
///
/// The generated file has the following structure:
/// ```json
/// {
///   "id": "game-3",
///   "white": "alpha-beta",
///   "black": "random",
///   "result": "white",
///   "termination": "checkmate",
///   "start_fen": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
///   "final_fen": "...",
///   "final_placement": "...",
///   "moves": [
///     { "uci": "e2e4", "en_passant": false },
///     { "uci": "d7d5", "en_passant": false },
///     { "uci": "e4d5", "captured": "p", "en_passant": false }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns an `std::io::Error` if the file cannot be created or written to.
pub fn write_game_json<P: AsRef<Path>>(
    path: P,
    id: &str,
    record: &GameRecord,
) -> std::io::Result<()> {
    let final_placement = record
        .final_fen
        .split_whitespace()
        .next()
        .unwrap_or_default();

    let json = GameJson {
        id,
        white: record.white.to_string(),
        black: record.black.to_string(),
        result: record.result.as_str(),
        termination: record.termination,
        start_fen: &record.start_fen,
        final_fen: &record.final_fen,
        final_placement,
        moves: &record.moves,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_runner::MatchResult;
    use chess_ai::Difficulty;
    use std::fs;

    fn record(
        moves: Vec<MoveRecord>,
        result: MatchResult,
        termination: Termination,
    ) -> GameRecord {
        GameRecord {
            white: Difficulty::AlphaBeta,
            black: Difficulty::Random,
            moves,
            result,
            termination,
            start_fen: chess_core::FenParser::STARTPOS.to_string(),
            final_fen: "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".to_string(),
        }
    }

    fn plain(uci: &str) -> MoveRecord {
        MoveRecord {
            uci: uci.to_string(),
            captured: None,
            castle: None,
            en_passant: false,
            promotion: None,
        }
    }

    fn read_back(path: &Path) -> serde_json::Value {
        let contents = fs::read_to_string(path).expect("Failed to read JSON file");
        serde_json::from_str(&contents).expect("Should be valid JSON")
    }

    #[test]
    fn test_write_game_json_creates_valid_file() {
        let json_path = std::env::temp_dir().join("chess_arena_test_game.json");
        let game = record(
            vec![plain("e2e4"), plain("e7e5")],
            MatchResult::WhiteWins,
            Termination::Checkmate,
        );

        write_game_json(&json_path, "test-game-id", &game).expect("Failed to write JSON file");
        assert!(json_path.exists(), "JSON file should be created");

        let parsed = read_back(&json_path);
        assert_eq!(parsed["id"], "test-game-id");
        assert_eq!(parsed["white"], "alpha-beta");
        assert_eq!(parsed["black"], "random");
        assert_eq!(parsed["result"], "white");
        assert_eq!(parsed["termination"], "checkmate");
        assert_eq!(parsed["final_placement"], "R5k1/5ppp/8/8/8/8/8/6K1");
        assert_eq!(parsed["moves"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["moves"][0]["uci"], "e2e4");

        fs::remove_file(&json_path).ok();
    }

    #[test]
    fn test_write_game_json_draw_at_ply_limit() {
        let json_path = std::env::temp_dir().join("chess_arena_test_draw.json");
        let game = record(vec![], MatchResult::Draw, Termination::PlyLimit);

        write_game_json(&json_path, "draw-id", &game).expect("Failed to write JSON file");

        let parsed = read_back(&json_path);
        assert_eq!(parsed["result"], "draw");
        assert_eq!(parsed["termination"], "ply_limit");
        assert_eq!(parsed["moves"].as_array().unwrap().len(), 0);

        fs::remove_file(&json_path).ok();
    }

    #[test]
    fn test_move_flags_are_written() {
        let json_path = std::env::temp_dir().join("chess_arena_test_flags.json");
        let game = record(
            vec![
                MoveRecord {
                    uci: "e1g1".to_string(),
                    castle: Some("O-O"),
                    ..plain("")
                },
                MoveRecord {
                    uci: "c5d6".to_string(),
                    captured: Some('p'),
                    en_passant: true,
                    ..plain("")
                },
                MoveRecord {
                    uci: "a7a8n".to_string(),
                    promotion: Some('n'),
                    ..plain("")
                },
            ],
            MatchResult::BlackWins,
            Termination::Checkmate,
        );

        write_game_json(&json_path, "flags-id", &game).expect("Failed to write JSON file");

        let parsed = read_back(&json_path);
        assert_eq!(parsed["result"], "black");
        assert_eq!(parsed["moves"][0]["castle"], "O-O");
        assert!(parsed["moves"][0].get("captured").is_none());
        assert_eq!(parsed["moves"][1]["captured"], "p");
        assert_eq!(parsed["moves"][1]["en_passant"], true);
        assert_eq!(parsed["moves"][2]["promotion"], "n");

        fs::remove_file(&json_path).ok();
    }

    #[test]
    fn test_write_game_json_to_missing_directory_fails() {
        let json_path = std::env::temp_dir()
            .join("chess_arena_no_such_dir")
            .join("game.json");
        let game = record(vec![], MatchResult::Draw, Termination::Stalemate);
        assert!(write_game_json(&json_path, "x", &game).is_err());
    }
}
