//! Engine abstraction layer.
//!
//! Defines common per-move parameters and output payloads so different move
//! selectors (full search, random baseline) can be driven through a single
//! trait by the match harness and demo binary.

use crate::chess_errors::EndgameErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{EndgameMove, Side};
use crate::search::board_scoring::Score;
use crate::search::repetition::RepetitionTracker;

/// Per-move search parameters supplied by the driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams<'a> {
    /// Search depth in plies; engines fall back to their own default.
    pub depth: Option<u8>,
    /// Real-game position counts, for engines that score repetition draws.
    /// Engines must never record positions into it.
    pub tracker: Option<&'a RepetitionTracker>,
}

/// Engine response: the chosen move (if any legal move exists), its score
/// when the engine computed one, and human-readable info lines for logging.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<EndgameMove>,
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    /// Choose a move for `side` on `board`. `best_move` is `None` when the
    /// side to move has no legal moves; that is a game state for the driver
    /// to classify, not an error.
    fn choose_move(
        &mut self,
        board: &BoardState,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, EndgameErrors>;
}
