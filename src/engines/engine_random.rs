//! Uniform-random baseline engine.
//!
//! Selects uniformly from legal moves and is primarily used as a weak
//! opponent in harness play and as a generator of varied legal games in
//! tests. Seedable for reproducibility.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::chess_errors::EndgameErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Side;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::seeded(rand::rng().random())
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "KPK Random"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        side: Side,
        _params: &GoParams,
    ) -> Result<EngineOutput, EndgameErrors> {
        let moves = legal_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            moves.len()
        ));

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
