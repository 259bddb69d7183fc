//! Pure move application.
//!
//! `apply_move` builds the post-move board without touching its input:
//! remove the origin occupant, remove any captured occupant at the
//! destination, and place the mover, promoted to a queen if it is a pawn
//! arriving on its promotion rank. Promotion is an atomic replacement; a
//! pawn and its queen never coexist on the result board.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{EndgameMove, Piece, PieceKind};

/// Produce the board after `mv`. A move from an empty origin is a no-op
/// apart from clearing the destination; callers only pass generated moves,
/// which always originate from an occupied square.
pub fn apply_move(board: &BoardState, mv: EndgameMove) -> BoardState {
    let mut next = board.clone();
    let Some(mover) = next.remove(mv.from) else {
        return next;
    };
    next.remove(mv.to);

    let placed = if mover.kind == PieceKind::Pawn && mv.to.rank == mover.side.promotion_rank() {
        Piece::new(mover.side, PieceKind::Queen)
    } else {
        mover
    };
    next.place(mv.to, placed);
    next
}
