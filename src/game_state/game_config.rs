//! Game-start configuration and setup validation.
//!
//! The evaluator needs to know whether the promoting side owned a pawn when
//! the game began: losing that pawn is a decisive event, but a bare-kings
//! setup never had one to lose. That fact is captured here as an explicit
//! value threaded into evaluation and search instead of hidden shared state.

use crate::chess_errors::EndgameErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{PieceKind, Side};

/// Immutable facts about the game as it was set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// True when the promoting side (Light) started the game with a pawn.
    /// Controls whether "pawn lost" scoring applies.
    pub light_had_pawn: bool,
}

impl GameConfig {
    /// Config for the canonical king-and-pawn setup.
    pub const fn with_pawn() -> Self {
        GameConfig { light_had_pawn: true }
    }

    /// Config for a bare-kings setup.
    pub const fn bare_kings() -> Self {
        GameConfig { light_had_pawn: false }
    }
}

/// Validate an initial board and derive its `GameConfig`.
///
/// Supported configurations: exactly one king per side, optionally one Light
/// pawn on a rank where a pawn can legally stand (not the promotion rank,
/// not behind its start rank), and nothing else. Queens are rejected here
/// because they exist only through promotion, which cannot have happened
/// before the first move.
pub fn validate_setup(board: &BoardState) -> Result<GameConfig, EndgameErrors> {
    for side in [Side::Light, Side::Dark] {
        let mut kings = board
            .iter()
            .filter(|(_, piece)| piece.side == side && piece.kind == PieceKind::King);
        if kings.next().is_none() {
            return Err(EndgameErrors::MissingKing(side));
        }
        if kings.next().is_some() {
            return Err(EndgameErrors::DuplicateKing(side));
        }
    }

    let mut saw_pawn = false;
    for (square, piece) in board.iter() {
        match (piece.side, piece.kind) {
            (_, PieceKind::King) => {}
            (Side::Light, PieceKind::Pawn) => {
                if saw_pawn {
                    return Err(EndgameErrors::UnsupportedPiece(square));
                }
                saw_pawn = true;
                let rank = square.rank;
                if rank <= Side::Light.promotion_rank() || rank > Side::Light.pawn_start_rank() {
                    return Err(EndgameErrors::PawnOnUnsupportedRank(square));
                }
            }
            // Dark pawns and any queen are outside the supported setups.
            _ => return Err(EndgameErrors::UnsupportedPiece(square)),
        }
    }

    Ok(GameConfig {
        light_had_pawn: saw_pawn,
    })
}
