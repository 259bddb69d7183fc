//! King pseudo-legal destination generation.
//!
//! Destinations ignore whether the king would move into check; the legality
//! filter prunes self-check moves after a trial application.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Side, Square};

/// The 8 king step offsets as (rank delta, file delta).
pub const KING_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Squares a king of `side` on `from` can step to: the adjacent squares that
/// are in bounds and not occupied by a friendly piece. Enemy-occupied squares
/// are included (capture).
pub fn king_destinations(board: &BoardState, from: Square, side: Side) -> Vec<Square> {
    let mut destinations = Vec::with_capacity(8);
    for (d_rank, d_file) in KING_DIRECTIONS {
        let Some(to) = from.offset(d_rank, d_file) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.side == side => {}
            _ => destinations.push(to),
        }
    }
    destinations
}
