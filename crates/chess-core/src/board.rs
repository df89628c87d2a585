//! The 8x8 board grid.

use crate::{Color, FenError, FenParser, Piece, Square};

/// A fixed 8x8 grid of optional pieces.
///
/// The board is plain data. It is `Copy`, so simulating a move means
/// taking a copy and editing it; two boards never share storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        let placement = FenParser::STARTPOS
            .split_whitespace()
            .next()
            .unwrap_or_default();
        Self::from_placement(placement).expect("STARTPOS placement is valid")
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize]
    }

    /// Returns the piece at `(row, col)`, or `None` when the square is empty
    /// or the coordinates are off the board.
    #[inline]
    pub fn get_rc(&self, row: u8, col: u8) -> Option<(Piece, Color)> {
        Square::new(row, col).and_then(|sq| self.get(sq))
    }

    /// Places a piece, replacing whatever stood on the square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece, color: Color) {
        self.squares[sq.index() as usize] = Some((piece, color));
    }

    /// Removes and returns the piece on the square.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize].take()
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Returns the color of the piece on the square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(_, color)| color)
    }

    /// Returns the square of the given color's king.
    ///
    /// Boards built for tests or simulation may lack a king; callers treat
    /// `None` as an unsafe position.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find(Piece::King, color).next()
    }

    /// Iterates over the squares holding the given piece type and color.
    pub fn find(&self, piece: Piece, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces(color)
            .filter(move |&(_, p)| p == piece)
            .map(|(sq, _)| sq)
    }

    /// Iterates over every piece of the given color with its square.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some((piece, c)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Returns the number of pieces of the given color, kings included.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Parses the piece-placement field of a FEN string.
    ///
    /// Ranks are separated by `/` and listed from row 0 (rank 8) down to
    /// row 7 (rank 1); digits encode runs of empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        FenParser::validate_piece_placement(placement)?;

        let mut board = Board::empty();
        for (row, rank_str) in placement.split('/').enumerate() {
            let mut col = 0u8;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as u8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::new(row as u8, col) {
                        board.set(sq, piece, color);
                    }
                    col += 1;
                }
            }
        }
        Ok(board)
    }

    /// Serializes the board occupancy as a FEN piece-placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();

        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                match self.get_rc(row, col) {
                    Some((piece, color)) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = match self.get_rc(row, col) {
                    Some((piece, color)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
