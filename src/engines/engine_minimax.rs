//! The alpha-beta search engine behind the `Engine` trait.

use crate::chess_errors::EndgameErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Side;
use crate::game_state::game_config::GameConfig;
use crate::search::minimax::best_move;

/// Default lookahead when the driver does not request a depth. Matches the
/// interactive game's setting; deep enough to spot promotions and hanging
/// pawns, shallow enough to stay instant at this piece count.
pub const DEFAULT_DEPTH: u8 = 3;

pub struct MinimaxEngine {
    config: GameConfig,
    default_depth: u8,
}

impl MinimaxEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            default_depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(config: GameConfig, depth: u8) -> Self {
        Self {
            config,
            default_depth: depth,
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "KPK Minimax"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        side: Side,
        params: &GoParams,
    ) -> Result<EngineOutput, EndgameErrors> {
        let depth = params.depth.unwrap_or(self.default_depth);
        let result = best_move(board, side, depth, &self.config, params.tracker);

        let mut out = EngineOutput::default();
        out.best_move = result.best;
        out.score = Some(result.score);
        out.info_lines.push(format!(
            "info string minimax_engine depth {} score {}",
            depth, result.score
        ));
        Ok(out)
    }
}
