//! Errors used throughout the endgame engine.
//!
//! This module defines the canonical error type returned at the crate's
//! fallible boundaries: setup validation, engine selection, and harness
//! play. The core rules functions (move generation, attack detection,
//! search) are total and report outcomes through their return values, never
//! through errors; anomalies inside search resolve to terminal game states.

use crate::game_state::chess_types::{Side, Square};

/// Unified error type for the endgame engine.
///
/// Variants carry contextual payloads where useful so callers can log or
/// display precise diagnostics. Setup-related variants are expected during
/// interactive placement and should be handled by re-prompting; the engine
/// variants indicate a driver bug (for example asking an engine to move in
/// a finished position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndgameErrors {
    /// Setup produced a board with no king for the given side.
    MissingKing(Side),

    /// Setup produced a board with more than one king for the given side.
    DuplicateKing(Side),

    /// Setup placed a pawn on a rank where it could never legally stand
    /// (the promotion rank or the rank behind its start rank).
    ///
    /// Payload: the offending square.
    PawnOnUnsupportedRank(Square),

    /// Setup placed a piece the supported configurations do not allow:
    /// a second pawn, a pawn for the non-promoting side, or a pre-placed
    /// queen (queens exist only through promotion).
    ///
    /// Payload: the offending square.
    UnsupportedPiece(Square),

    /// An engine was asked to choose a move in a position where the side to
    /// move has no legal moves. Checkmate and stalemate are game states, not
    /// engine inputs; the driver should classify them before calling.
    NoLegalMoves,

    /// A square or move string failed to parse.
    ///
    /// Payload: the original offending string.
    InvalidAlgebraicString(String),
}
