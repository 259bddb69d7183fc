//! Standalone self-play demo for the KPK endgame engine.
//!
//! Plays the canonical king-and-pawn-versus-king position between two
//! search engines and prints the game. Run with:
//! `cargo run --release`
//! `cargo run --release -- --verbose`

use kpk_engine::engines::engine_minimax::MinimaxEngine;
use kpk_engine::engines::engine_trait::{Engine, GoParams};
use kpk_engine::game_state::board_state::BoardState;
use kpk_engine::game_state::chess_types::{Piece, PieceKind, Side, Square};
use kpk_engine::game_state::game_config::validate_setup;
use kpk_engine::move_generation::legal_move_apply::apply_move;
use kpk_engine::search::repetition::RepetitionTracker;
use kpk_engine::utils::match_harness::terminal_state;
use kpk_engine::utils::render_game_state::render_board;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Light king e1, Light pawn e2, Dark king e8.
    let initial = BoardState::from_pieces(&[
        (Square::new(7, 4), Piece::new(Side::Light, PieceKind::King)),
        (Square::new(6, 4), Piece::new(Side::Light, PieceKind::Pawn)),
        (Square::new(0, 4), Piece::new(Side::Dark, PieceKind::King)),
    ]);
    let config = validate_setup(&initial).map_err(|e| format!("{e:?}"))?;

    let mut light = MinimaxEngine::with_depth(config, 4);
    let mut dark = MinimaxEngine::with_depth(config, 3);

    let mut board = initial;
    let mut side = Side::Light;
    let mut tracker = RepetitionTracker::new();
    tracker.record(&board);

    println!("{}", render_board(&board));

    for ply in 0..200u16 {
        if let Some(outcome) = terminal_state(&board, side, &config, &tracker) {
            println!("game over after {ply} plies: {outcome:?}");
            return Ok(());
        }

        let engine: &mut dyn Engine = match side {
            Side::Light => &mut light,
            Side::Dark => &mut dark,
        };
        let params = GoParams {
            depth: None,
            tracker: Some(&tracker),
        };
        let output = engine
            .choose_move(&board, side, &params)
            .map_err(|e| format!("{e:?}"))?;
        if verbose {
            for line in &output.info_lines {
                println!("{line}");
            }
        }
        let Some(mv) = output.best_move else {
            return Err(format!("{side:?} engine returned no move"));
        };

        board = apply_move(&board, mv);
        tracker.record(&board);
        side = side.opposite();

        println!();
        println!("{}", render_board(&board));
    }

    println!("game stopped at the ply limit");
    Ok(())
}
