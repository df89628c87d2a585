//! Standard chess rules.

use super::{DrawReason, GameResult, RuleSet};
use crate::legal::{generate_moves, is_legal};
use crate::status::{game_status, in_check, is_insufficient_material, GameStatus};
use crate::update::make_move;
use crate::Position;
use chess_core::{Color, Move};

/// FIDE rules without the clock-based and repetition draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        generate_moves(position)
    }

    fn is_legal(&self, position: &Position, m: Move) -> bool {
        is_legal(position, m)
    }

    fn make_move(&self, position: &Position, m: Move) -> Position {
        make_move(position, m)
    }

    fn is_check(&self, position: &Position) -> bool {
        in_check(&position.board, position.side_to_move)
    }

    fn game_result(&self, position: &Position) -> Option<GameResult> {
        match game_status(position, position.side_to_move) {
            GameStatus::Checkmate => Some(match position.side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }),
            GameStatus::Stalemate => Some(GameResult::Draw(DrawReason::Stalemate)),
            GameStatus::InsufficientMaterial => {
                Some(GameResult::Draw(DrawReason::InsufficientMaterial))
            }
            GameStatus::Check | GameStatus::Ongoing => None,
        }
    }

    fn is_insufficient_material(&self, position: &Position) -> bool {
        is_insufficient_material(&position.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn initial_position() {
        let pos = StandardChess.initial_position();
        assert_eq!(pos.to_fen(), chess_core::FenParser::STARTPOS);
        assert_eq!(StandardChess.generate_moves(&pos).len(), 20);
        assert!(!StandardChess.is_game_over(&pos));
    }

    #[test]
    fn try_make_move_rejects_illegal() {
        let pos = StandardChess.initial_position();
        let illegal = Move::from_uci("e2e5").unwrap();
        assert!(StandardChess.try_make_move(&pos, illegal).is_none());

        let legal = Move::from_uci("e2e4").unwrap();
        let next = StandardChess.try_make_move(&pos, legal).unwrap();
        assert_eq!(next.side_to_move, Color::Black);
    }

    #[test]
    fn checkmate_result_names_the_winner() {
        let mated = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(StandardChess.is_check(&mated));
        assert_eq!(
            StandardChess.game_result(&mated),
            Some(GameResult::BlackWins)
        );
    }

    #[test]
    fn draws_carry_their_reason() {
        let stalemate = pos("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(
            StandardChess.game_result(&stalemate),
            Some(GameResult::Draw(DrawReason::Stalemate))
        );

        let bare = pos("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(StandardChess.is_insufficient_material(&bare));
        assert_eq!(
            StandardChess.game_result(&bare),
            Some(GameResult::Draw(DrawReason::InsufficientMaterial))
        );
    }

    #[test]
    fn result_display() {
        assert_eq!(GameResult::WhiteWins.to_string(), "1-0");
        assert_eq!(GameResult::BlackWins.to_string(), "0-1");
        assert_eq!(
            GameResult::Draw(DrawReason::Stalemate).to_string(),
            "1/2-1/2"
        );
    }
}
