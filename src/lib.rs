//! Crate root module declarations for the KPK endgame engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! drivers can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_types;
    pub mod game_config;
}

pub mod moves {
    pub mod king_moves;
    pub mod pawn_moves;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod repetition;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod render_game_state;
}
