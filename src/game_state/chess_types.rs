//! Core value types for the reduced KPK endgame.
//!
//! The supported piece set is deliberately tiny: one king per side, at most
//! one pawn for the promoting side, and the queen that pawn may become.

pub use crate::game_state::board_state::BoardState;

/// Side to move. Light is the side whose pawn can promote; its pawn advances
/// toward rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Rank a pawn of this side must reach to promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    /// Rank this side's pawn starts on (double-push origin).
    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Side::Light => 6,
            Side::Dark => 1,
        }
    }

    /// Rank delta of a single pawn push for this side.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Rank this side's king starts on; used by the passive-king heuristic.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Side::Light => 7,
            Side::Dark => 0,
        }
    }
}

/// Piece kind. Queen exists only as the product of pawn promotion; it is
/// never placed during setup and never generates moves of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    King,
    Pawn,
    Queen,
}

/// A piece on the board: owning side plus kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece { side, kind }
    }
}

/// Board square as (rank, file), both in `0..=7`. Rank 0 is Light's
/// promotion rank. The derived ordering (rank first, then file) is what
/// makes `BoardState` iteration canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    #[inline]
    pub const fn in_bounds(rank: i8, file: i8) -> bool {
        rank >= 0 && rank <= 7 && file >= 0 && file <= 7
    }

    /// Offset by (rank delta, file delta); `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank + d_rank;
        let file = self.file + d_file;
        if Square::in_bounds(rank, file) {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Chebyshev (king-move) distance to another square.
    #[inline]
    pub fn chebyshev_distance(self, other: Square) -> i8 {
        let dr = (self.rank - other.rank).abs();
        let df = (self.file - other.file).abs();
        if dr > df {
            dr
        } else {
            df
        }
    }

    /// Manhattan distance to another square.
    #[inline]
    pub fn manhattan_distance(self, other: Square) -> i8 {
        (self.rank - other.rank).abs() + (self.file - other.file).abs()
    }
}

/// A move as an (origin, destination) pair. Promotion is implied by a pawn
/// arriving on its promotion rank; there is no separate promotion payload
/// because the queen is the only promotion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndgameMove {
    pub from: Square,
    pub to: Square,
}

impl EndgameMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        EndgameMove { from, to }
    }
}
