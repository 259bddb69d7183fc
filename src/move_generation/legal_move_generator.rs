//! Legal move generation pipeline.
//!
//! Composes piece-wise pseudo-legal generation with the attack oracle:
//! every candidate is applied to a trial board (including promotion
//! substitution, so a promoting pawn is tested for king safety in its queen
//! form) and kept only if the mover's own king is not attacked afterwards.
//! The promoted queen initiates no moves; it only attacks and blocks.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{EndgameMove, PieceKind, Side, Square};
use crate::move_generation::attack_checks::is_attacked;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::king_moves::king_destinations;
use crate::moves::pawn_moves::pawn_destinations;

/// Every legal (origin, destination) move for `side`, in canonical board
/// iteration order. An empty result means checkmate or stalemate, which the
/// caller distinguishes via `is_attacked`.
pub fn legal_moves(board: &BoardState, side: Side) -> Vec<EndgameMove> {
    let mut legal = Vec::new();

    for (from, piece) in board.pieces_of(side) {
        let destinations: Vec<Square> = match piece.kind {
            PieceKind::King => king_destinations(board, from, side),
            PieceKind::Pawn => pawn_destinations(board, from, side),
            PieceKind::Queen => Vec::new(),
        };

        for to in destinations {
            let mv = EndgameMove::new(from, to);
            let trial = apply_move(board, mv);
            if !is_attacked(&trial, side) {
                legal.push(mv);
            }
        }
    }

    legal
}
