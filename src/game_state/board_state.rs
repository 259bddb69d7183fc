//! Canonical board occupancy model.
//!
//! `BoardState` maps occupied squares to pieces. An ordered map is used so
//! that two boards with identical occupancy always iterate, compare, and
//! hash identically regardless of the order pieces were placed; the board
//! itself therefore serves as the repetition key. With at most four pieces
//! on the board, cloning a state per search ply is cheap.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Immutable-per-ply occupancy mapping. A square holds at most one piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoardState {
    squares: BTreeMap<Square, Piece>,
}

impl BoardState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from (square, piece) pairs. Later pairs overwrite
    /// earlier ones on the same square.
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Self::new();
        for &(square, piece) in pieces {
            board.place(square, piece);
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(&square).copied()
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        !self.squares.contains_key(&square)
    }

    /// Place a piece, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares.insert(square, piece);
    }

    /// Remove and return the occupant of `square`, if any.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares.remove(&square)
    }

    /// Iterate occupied squares in canonical (rank-major) order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().map(|(&sq, &piece)| (sq, piece))
    }

    /// All occupied squares belonging to one side, in canonical order.
    #[inline]
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.side == side)
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    /// Square of the given side's king, if it is still on the board.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.find(side, PieceKind::King)
    }

    /// First square holding a (side, kind) piece, if any. Supported
    /// configurations never contain duplicates of a (side, kind) pair.
    pub fn find(&self, side: Side, kind: PieceKind) -> Option<Square> {
        self.iter()
            .find(|(_, piece)| piece.side == side && piece.kind == kind)
            .map(|(square, _)| square)
    }

    #[inline]
    pub fn contains(&self, side: Side, kind: PieceKind) -> bool {
        self.find(side, kind).is_some()
    }

    /// True once the given side's pawn has converted: either a queen of that
    /// side exists, or its pawn already sits on the promotion rank.
    pub fn has_promoted(&self, side: Side) -> bool {
        if self.contains(side, PieceKind::Queen) {
            return true;
        }
        match self.find(side, PieceKind::Pawn) {
            Some(square) => square.rank == side.promotion_rank(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn king(side: Side) -> Piece {
        Piece::new(side, PieceKind::King)
    }

    #[test]
    fn placement_order_does_not_affect_equality_or_iteration() {
        let a = BoardState::from_pieces(&[
            (Square::new(7, 4), king(Side::Light)),
            (Square::new(0, 4), king(Side::Dark)),
            (Square::new(6, 4), Piece::new(Side::Light, PieceKind::Pawn)),
        ]);
        let b = BoardState::from_pieces(&[
            (Square::new(6, 4), Piece::new(Side::Light, PieceKind::Pawn)),
            (Square::new(0, 4), king(Side::Dark)),
            (Square::new(7, 4), king(Side::Light)),
        ]);
        assert_eq!(a, b);
        let order_a: Vec<_> = a.iter().collect();
        let order_b: Vec<_> = b.iter().collect();
        assert_eq!(order_a, order_b);
    }

    #[test]
    fn king_lookup_per_side() {
        let board = BoardState::from_pieces(&[
            (Square::new(7, 4), king(Side::Light)),
            (Square::new(0, 4), king(Side::Dark)),
        ]);
        assert_eq!(board.king_square(Side::Light), Some(Square::new(7, 4)));
        assert_eq!(board.king_square(Side::Dark), Some(Square::new(0, 4)));
        assert!(board.find(Side::Light, PieceKind::Pawn).is_none());
    }

    #[test]
    fn promotion_detected_via_queen_or_pawn_on_promotion_rank() {
        let with_queen = BoardState::from_pieces(&[
            (Square::new(7, 4), king(Side::Light)),
            (Square::new(0, 4), king(Side::Dark)),
            (Square::new(3, 2), Piece::new(Side::Light, PieceKind::Queen)),
        ]);
        assert!(with_queen.has_promoted(Side::Light));

        let pawn_on_last = BoardState::from_pieces(&[
            (Square::new(7, 4), king(Side::Light)),
            (Square::new(0, 6), king(Side::Dark)),
            (Square::new(0, 1), Piece::new(Side::Light, PieceKind::Pawn)),
        ]);
        assert!(pawn_on_last.has_promoted(Side::Light));

        let mid_game = BoardState::from_pieces(&[
            (Square::new(7, 4), king(Side::Light)),
            (Square::new(0, 4), king(Side::Dark)),
            (Square::new(4, 4), Piece::new(Side::Light, PieceKind::Pawn)),
        ]);
        assert!(!mid_game.has_promoted(Side::Light));
    }
}
