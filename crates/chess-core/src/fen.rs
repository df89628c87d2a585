//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{Board, Color, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings or piece placements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN fields.
///
/// Placement, side to move and en passant are decoded into core types.
/// Castling availability stays textual (`"KQkq"`, `"-"`); the engine owns
/// the rights representation. The two clocks are optional in the input and
/// default to `0` and `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    pub board: Board,
    pub active_color: Color,
    pub castling: String,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. The halfmove and fullmove fields may be omitted.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let board = Board::from_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parts[2];
        Self::validate_castling(castling)?;

        let en_passant = Self::parse_en_passant(parts[3])?;

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove = parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove, fullmove)
        } else {
            (0, 1)
        };

        Ok(FenParser {
            board,
            active_color,
            castling: castling.to_string(),
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Checks the shape of a placement field: eight `/`-separated rows of
    /// exactly eight squares each, using only piece letters and digits.
    pub(crate) fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        for (row, text) in rows.iter().enumerate() {
            let mut width = 0u32;
            for c in text.chars() {
                match c {
                    '1'..='8' => width += c as u32 - '0' as u32,
                    'p' | 'n' | 'b' | 'r' | 'q' | 'k' | 'P' | 'N' | 'B' | 'R' | 'Q' | 'K' => {
                        width += 1
                    }
                    _ => {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "invalid character '{}' in row {}",
                            c, row
                        )))
                    }
                }
            }
            if width != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "row {} covers {} squares, expected 8",
                    row, width
                )));
            }
        }

        Ok(())
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }
        match castling.chars().find(|c| !"KQkq".contains(*c)) {
            Some(c) => Err(FenError::InvalidCastlingRights(format!(
                "invalid character '{}'",
                c
            ))),
            None => Ok(()),
        }
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }
        // Only the skipped square of a double push can be a target:
        // rank 3 (row 5) or rank 6 (row 2).
        match Square::from_algebraic(ep) {
            Some(sq) if sq.row() == 2 || sq.row() == 5 => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    /// Converts the parsed fields back to a FEN string.
    pub fn to_fen(&self) -> String {
        let color = match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .en_passant
            .map(|sq| sq.to_algebraic())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} {} {} {} {} {}",
            self.board.to_placement(),
            color,
            self.castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
