//! Move execution and the state that travels with it.
//!
//! Everything here is a pure function of its inputs. Castle, en passant and
//! promotion are recognised from the board when a move is applied; a
//! [`Move`] never carries those flags itself.

use crate::position::{CastlingRights, Position};
use chess_core::{Board, Color, Move, Piece, Square};

/// The side a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Columns strictly between the king and the rook.
    pub fn between_cols(self) -> std::ops::RangeInclusive<u8> {
        match self {
            CastleSide::Kingside => 5..=6,
            CastleSide::Queenside => 1..=3,
        }
    }

    /// Returns the side whose rook starts on `sq` for `color`, if any.
    pub fn from_rook_home(sq: Square, color: Color) -> Option<CastleSide> {
        if sq.row() != color.back_rank() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|side| side.rook_from_col() == sq.col())
    }
}

/// Flags derived from a move on a given board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveKind {
    /// The moving piece.
    pub piece: Piece,
    /// The mover's color.
    pub color: Color,
    /// The captured piece, including an en passant victim.
    pub captured: Option<Piece>,
    /// Set when the king castles.
    pub castle: Option<CastleSide>,
    /// Set for en passant captures.
    pub en_passant: bool,
    /// The piece a pawn turns into on the last rank.
    pub promotion: Option<Piece>,
}

impl MoveKind {
    /// Returns true if the move takes a piece.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Derives the castle, en passant, promotion and capture flags of `m`.
///
/// Returns `None` if `from` is empty. The move is not checked for legality.
pub fn classify_move(board: &Board, m: Move) -> Option<MoveKind> {
    let (from, to) = (m.from(), m.to());
    let (piece, color) = board.get(from)?;

    let castle = if piece == Piece::King
        && from.col() == 4
        && from.row() == to.row()
        && from.col().abs_diff(to.col()) == 2
    {
        Some(if to.col() > from.col() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        })
    } else {
        None
    };

    let en_passant = piece == Piece::Pawn && from.col() != to.col() && board.is_empty(to);

    let captured = if en_passant {
        Square::new(from.row(), to.col())
            .and_then(|sq| board.get(sq))
            .map(|(p, _)| p)
    } else {
        board
            .get(to)
            .filter(|&(_, c)| c != color)
            .map(|(p, _)| p)
    };

    let promotion = (piece == Piece::Pawn && to.row() == color.promotion_row()).then(|| {
        m.promotion()
            .filter(|p| p.is_promotion_target())
            .unwrap_or(Piece::Queen)
    });

    Some(MoveKind {
        piece,
        color,
        captured,
        castle,
        en_passant,
        promotion,
    })
}

/// Applies `m` to a copy of `board` and returns the copy.
///
/// Moves the castling rook, removes an en passant victim from the origin
/// row and destination column, and replaces a pawn reaching the last rank.
/// A move from an empty square returns the board unchanged.
pub fn execute_move(board: &Board, m: Move) -> Board {
    let mut next = *board;
    let Some(kind) = classify_move(board, m) else {
        return next;
    };
    let (from, to) = (m.from(), m.to());

    next.clear(from);
    if kind.en_passant {
        if let Some(victim) = Square::new(from.row(), to.col()) {
            next.clear(victim);
        }
    }
    next.set(to, kind.promotion.unwrap_or(kind.piece), kind.color);

    if let Some(side) = kind.castle {
        let row = from.row();
        if let (Some(rook_from), Some(rook_to)) = (
            Square::new(row, side.rook_from_col()),
            Square::new(row, side.rook_to_col()),
        ) {
            if let Some((rook, rook_color)) = next.clear(rook_from) {
                next.set(rook_to, rook, rook_color);
            }
        }
    }

    next
}

/// Computes castling rights after `piece` of `color` leaves `from`.
///
/// A king move clears both rights of its color; a rook leaving its exact
/// home square clears that side. Captured rooks are handled by
/// [`revoke_captured_rook`].
#[must_use]
pub fn update_castling_rights(
    rights: CastlingRights,
    from: Square,
    piece: Piece,
    color: Color,
) -> CastlingRights {
    match piece {
        Piece::King => rights.without_color(color),
        Piece::Rook => match CastleSide::from_rook_home(from, color) {
            Some(CastleSide::Kingside) => rights.without_kingside(color),
            Some(CastleSide::Queenside) => rights.without_queenside(color),
            None => rights,
        },
        _ => rights,
    }
}

/// Clears the right belonging to a rook captured on its home square.
#[must_use]
pub fn revoke_captured_rook(
    rights: CastlingRights,
    to: Square,
    captured: Option<(Piece, Color)>,
) -> CastlingRights {
    match captured {
        Some((Piece::Rook, color)) => match CastleSide::from_rook_home(to, color) {
            Some(CastleSide::Kingside) => rights.without_kingside(color),
            Some(CastleSide::Queenside) => rights.without_queenside(color),
            None => rights,
        },
        _ => rights,
    }
}

/// Returns the square skipped by a two-row pawn advance, or `None` for any
/// other move.
pub fn update_en_passant_target(
    from_row: u8,
    to_row: u8,
    to_col: u8,
    piece: Piece,
) -> Option<Square> {
    if piece == Piece::Pawn && from_row.abs_diff(to_row) == 2 {
        Square::new((from_row + to_row) / 2, to_col)
    } else {
        None
    }
}

/// Plays `m` and returns the next position.
///
/// The side to move passes to the opponent of the mover, castling rights
/// shrink as needed and the en passant target is recomputed from scratch.
/// A move from an empty square returns the position unchanged.
pub fn make_move(position: &Position, m: Move) -> Position {
    let board = &position.board;
    let Some((piece, color)) = board.get(m.from()) else {
        return *position;
    };

    let castling = update_castling_rights(position.castling, m.from(), piece, color);
    let castling = revoke_captured_rook(castling, m.to(), board.get(m.to()));

    Position {
        board: execute_move(board, m),
        side_to_move: color.opposite(),
        castling,
        en_passant: update_en_passant_target(m.from().row(), m.to().row(), m.to().col(), piece),
    }
}
