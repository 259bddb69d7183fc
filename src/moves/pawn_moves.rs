//! Pawn pseudo-legal destination generation and attack squares.
//!
//! Light pawns advance toward rank 0 and promote there; the Dark direction
//! is defined symmetrically but never arises in supported setups. Promotion
//! itself is handled by move application, not here: a push onto the
//! promotion rank is an ordinary destination from the generator's view.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Side, Square};

/// Squares a pawn of `side` on `from` can move to: a single push onto an
/// empty square, a double push from the start rank across two empty squares,
/// and diagonal captures onto enemy-occupied squares.
pub fn pawn_destinations(board: &BoardState, from: Square, side: Side) -> Vec<Square> {
    let mut destinations = Vec::with_capacity(4);
    let step = side.pawn_step();

    if let Some(one_ahead) = from.offset(step, 0) {
        if board.is_empty_square(one_ahead) {
            destinations.push(one_ahead);

            if from.rank == side.pawn_start_rank() {
                if let Some(two_ahead) = from.offset(2 * step, 0) {
                    if board.is_empty_square(two_ahead) {
                        destinations.push(two_ahead);
                    }
                }
            }
        }
    }

    for target in pawn_attack_squares(from, side) {
        match board.piece_at(target) {
            Some(piece) if piece.side != side => destinations.push(target),
            _ => {}
        }
    }

    destinations
}

/// The two squares a pawn of `side` on `from` attacks (one rank closer to
/// its promotion rank, one file to each side), clipped to the board.
pub fn pawn_attack_squares(from: Square, side: Side) -> Vec<Square> {
    let step = side.pawn_step();
    [-1, 1]
        .into_iter()
        .filter_map(|d_file| from.offset(step, d_file))
        .collect()
}
