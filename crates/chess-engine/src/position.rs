//! Chess position representation.

use chess_core::{Board, Color, FenError, FenParser, Square};

/// Castling rights flags.
///
/// Rights only ever get removed during a game; nothing in the engine sets
/// a flag once it has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns a copy with both rights of `color` removed.
    #[inline]
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        let mask = match color {
            Color::White => !(Self::WHITE_KINGSIDE | Self::WHITE_QUEENSIDE),
            Color::Black => !(Self::BLACK_KINGSIDE | Self::BLACK_QUEENSIDE),
        };
        CastlingRights(self.0 & mask)
    }

    /// Returns a copy with the kingside right of `color` removed.
    #[inline]
    #[must_use]
    pub const fn without_kingside(self, color: Color) -> Self {
        let mask = match color {
            Color::White => !Self::WHITE_KINGSIDE,
            Color::Black => !Self::BLACK_KINGSIDE,
        };
        CastlingRights(self.0 & mask)
    }

    /// Returns a copy with the queenside right of `color` removed.
    #[inline]
    #[must_use]
    pub const fn without_queenside(self, color: Color) -> Self {
        let mask = match color {
            Color::White => !Self::WHITE_QUEENSIDE,
            Color::Black => !Self::BLACK_QUEENSIDE,
        };
        CastlingRights(self.0 & mask)
    }

    /// Returns true if every right held by `self` is also held by `earlier`.
    ///
    /// A legal sequence of moves always satisfies `later.is_subset_of(earlier)`.
    #[inline]
    pub const fn is_subset_of(self, earlier: CastlingRights) -> bool {
        self.0 & !earlier.0 == 0
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Parses the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`).
    ///
    /// Unknown characters are ignored; [`FenParser`] rejects them earlier.
    pub fn from_fen_field(field: &str) -> Self {
        let flags = field.chars().fold(0u8, |acc, c| match c {
            'K' => acc | Self::WHITE_KINGSIDE,
            'Q' => acc | Self::WHITE_QUEENSIDE,
            'k' => acc | Self::BLACK_KINGSIDE,
            'q' => acc | Self::BLACK_QUEENSIDE,
            _ => acc,
        });
        CastlingRights::new(flags)
    }

    /// Formats the rights as a FEN castling field.
    pub fn to_fen_field(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        let mut field = String::with_capacity(4);
        if self.can_castle_kingside(Color::White) {
            field.push('K');
        }
        if self.can_castle_queenside(Color::White) {
            field.push('Q');
        }
        if self.can_castle_kingside(Color::Black) {
            field.push('k');
        }
        if self.can_castle_queenside(Color::Black) {
            field.push('q');
        }
        field
    }
}

/// A game-state snapshot: the board plus the state that travels with it.
///
/// The engine never keeps history. Every move produces a fresh `Position`
/// from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square: the square a capturing pawn moves to.
    pub en_passant: Option<Square>,
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Creates a position from a FEN string.
    ///
    /// The halfmove and fullmove clocks are validated but not kept.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Position {
            board: parsed.board,
            side_to_move: parsed.active_color,
            castling: CastlingRights::from_fen_field(&parsed.castling),
            en_passant: parsed.en_passant,
        })
    }

    /// Converts the position to a FEN string, with clocks written as `0 1`.
    pub fn to_fen(&self) -> String {
        FenParser {
            board: self.board,
            active_color: self.side_to_move,
            castling: self.castling.to_fen_field(),
            en_passant: self.en_passant,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
        .to_fen()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
