//! Position repetition tracking for draw detection.
//!
//! The tracker is an append-only multiset of board states seen in the real
//! game. The driver records each position after applying a real move; the
//! search never records its hypothetical positions, so lookahead cannot
//! pollute the count. `BoardState` hashes over its canonically ordered
//! occupancy, so two boards with the same pieces on the same squares always
//! share a key regardless of how they were built.

use std::collections::HashMap;

use crate::game_state::board_state::BoardState;

/// Number of occurrences at which a position is a repetition draw.
pub const REPETITION_DRAW_COUNT: u32 = 3;

/// Append-only multiset of positions seen during one game.
#[derive(Debug, Clone, Default)]
pub struct RepetitionTracker {
    counts: HashMap<BoardState, u32>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `board` and return its new count.
    pub fn record(&mut self, board: &BoardState) -> u32 {
        let count = self.counts.entry(board.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// How many times `board` has been recorded so far.
    pub fn count(&self, board: &BoardState) -> u32 {
        self.counts.get(board).copied().unwrap_or(0)
    }

    /// Driver-level terminal check: the position has occurred three times.
    pub fn is_repetition_draw(&self, board: &BoardState) -> bool {
        self.count(board) >= REPETITION_DRAW_COUNT
    }
}
