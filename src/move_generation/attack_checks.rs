//! Attack and check detection.
//!
//! `is_attacked` answers whether a side's king is currently attacked on a
//! given board. It fails closed: a board with no king for the queried side
//! reports "attacked", so a state missing a king is never treated as safe.
//! The promoted queen participates here with full rook-plus-bishop attack
//! lines even though it never generates moves of its own.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::moves::pawn_moves::pawn_attack_squares;

/// True iff the king of `side` is attacked by any enemy piece, or absent.
pub fn is_attacked(board: &BoardState, side: Side) -> bool {
    let Some(king_sq) = board.king_square(side) else {
        // No king on the board means the game already ended by capture;
        // never report such a state as safe.
        return true;
    };

    for (from, piece) in board.pieces_of(side.opposite()) {
        let attacks = match piece.kind {
            PieceKind::King => from.chebyshev_distance(king_sq) == 1,
            PieceKind::Pawn => pawn_attack_squares(from, piece.side).contains(&king_sq),
            PieceKind::Queen => queen_attacks_square(board, from, king_sq),
        };
        if attacks {
            return true;
        }
    }

    false
}

/// True iff a queen on `from` attacks `target` along a clear rank, file, or
/// diagonal. The scan walks one step at a time from the queen toward the
/// target; the line is clear when the first occupied square reached is the
/// target itself.
fn queen_attacks_square(board: &BoardState, from: Square, target: Square) -> bool {
    let d_rank = target.rank - from.rank;
    let d_file = target.file - from.file;

    let aligned = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
    if !aligned || (d_rank == 0 && d_file == 0) {
        return false;
    }

    let step_rank = d_rank.signum();
    let step_file = d_file.signum();

    let mut square = from;
    loop {
        let Some(next) = square.offset(step_rank, step_file) else {
            return false;
        };
        if next == target {
            return true;
        }
        if !board.is_empty_square(next) {
            return false;
        }
        square = next;
    }
}
