//! Headless engine-vs-engine game loop.
//!
//! Runs two `Engine` implementations against each other without any UI:
//! validates the setup, alternates turns, applies chosen moves to the
//! authoritative board, records every reached position in the repetition
//! tracker, and classifies the terminal outcome. The tracker is updated
//! only here, by real applied moves; engines receive it read-only.

use crate::chess_errors::EndgameErrors;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{PieceKind, Side};
use crate::game_state::game_config::{validate_setup, GameConfig};
use crate::move_generation::attack_checks::is_attacked;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::repetition::RepetitionTracker;
use crate::utils::algebraic::move_to_algebraic;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Light's pawn reached the promotion rank (or its queen is on the board).
    PromotionWin,
    /// Light's starting pawn was captured before promoting.
    PawnLost,
    /// The side to move had no legal moves while in check.
    Checkmate { winner: Side },
    /// The side to move had no legal moves and was not in check.
    Stalemate,
    /// The same position occurred three times.
    RepetitionDraw,
    /// The ply budget ran out first.
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub light_depth: Option<u8>,
    pub dark_depth: Option<u8>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 120,
            light_depth: None,
            dark_depth: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub plies: u16,
    pub final_board: BoardState,
    /// Applied moves in algebraic origin-destination form, in order.
    pub move_log: Vec<String>,
}

/// Classify a position that may end the game, in the same priority order the
/// search uses for its terminal nodes. Returns `None` while play continues.
pub fn terminal_state(
    board: &BoardState,
    side_to_move: Side,
    config: &GameConfig,
    tracker: &RepetitionTracker,
) -> Option<MatchOutcome> {
    if board.has_promoted(Side::Light) {
        return Some(MatchOutcome::PromotionWin);
    }
    if config.light_had_pawn && !board.contains(Side::Light, PieceKind::Pawn) {
        return Some(MatchOutcome::PawnLost);
    }
    if tracker.is_repetition_draw(board) {
        return Some(MatchOutcome::RepetitionDraw);
    }
    if legal_moves(board, side_to_move).is_empty() {
        if is_attacked(board, side_to_move) {
            return Some(MatchOutcome::Checkmate {
                winner: side_to_move.opposite(),
            });
        }
        return Some(MatchOutcome::Stalemate);
    }
    None
}

/// Play one game from `initial` with `side_to_move` starting.
pub fn play_match<'a>(
    light: &'a mut dyn Engine,
    dark: &'a mut dyn Engine,
    initial: &BoardState,
    side_to_move: Side,
    config: &MatchConfig,
) -> Result<MatchReport, EndgameErrors> {
    let game_config = validate_setup(initial)?;

    let mut board = initial.clone();
    let mut side = side_to_move;
    let mut tracker = RepetitionTracker::new();
    tracker.record(&board);

    let mut move_log = Vec::new();
    let mut plies: u16 = 0;

    while plies < config.max_plies {
        if let Some(outcome) = terminal_state(&board, side, &game_config, &tracker) {
            return Ok(MatchReport {
                outcome,
                plies,
                final_board: board,
                move_log,
            });
        }

        let (engine, depth) = match side {
            Side::Light => (&mut *light, config.light_depth),
            Side::Dark => (&mut *dark, config.dark_depth),
        };
        let params = GoParams {
            depth,
            tracker: Some(&tracker),
        };
        let output = engine.choose_move(&board, side, &params)?;
        // `terminal_state` saw legal moves, so a move must come back.
        let mv = output.best_move.ok_or(EndgameErrors::NoLegalMoves)?;

        board = apply_move(&board, mv);
        tracker.record(&board);
        move_log.push(move_to_algebraic(mv));
        side = side.opposite();
        plies += 1;
    }

    let outcome = terminal_state(&board, side, &game_config, &tracker)
        .unwrap_or(MatchOutcome::MaxPlies);
    Ok(MatchReport {
        outcome,
        plies,
        final_board: board,
        move_log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::chess_types::{EndgameMove, Piece, Square};
    use std::collections::VecDeque;

    /// Test engine that replays a fixed move script.
    struct ScriptedEngine {
        script: VecDeque<EndgameMove>,
    }

    impl ScriptedEngine {
        fn new(moves: &[EndgameMove]) -> Self {
            Self {
                script: moves.iter().copied().collect(),
            }
        }
    }

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(
            &mut self,
            _board: &BoardState,
            _side: Side,
            _params: &GoParams,
        ) -> Result<EngineOutput, EndgameErrors> {
            let mut out = EngineOutput::default();
            out.best_move = self.script.pop_front();
            Ok(out)
        }
    }

    fn mv(from: (i8, i8), to: (i8, i8)) -> EndgameMove {
        EndgameMove::new(Square::new(from.0, from.1), Square::new(to.0, to.1))
    }

    #[test]
    fn running_pawn_ends_in_promotion_win() {
        let board = BoardState::from_pieces(&[
            (Square::new(2, 7), Piece::new(Side::Light, PieceKind::King)),
            (Square::new(7, 0), Piece::new(Side::Dark, PieceKind::King)),
            (Square::new(1, 6), Piece::new(Side::Light, PieceKind::Pawn)),
        ]);
        let mut light = MinimaxEngine::new(GameConfig::with_pawn());
        let mut dark = MinimaxEngine::new(GameConfig::with_pawn());
        let report = play_match(
            &mut light,
            &mut dark,
            &board,
            Side::Light,
            &MatchConfig::default(),
        )
        .expect("match should run");
        assert_eq!(report.outcome, MatchOutcome::PromotionWin);
        assert_eq!(report.plies, 1);
        assert_eq!(report.move_log, vec!["g7g8".to_owned()]);
    }

    #[test]
    fn king_shuffle_reaches_repetition_draw() {
        // Both sides shuffle between two squares; the starting position
        // returns every four plies, so its third occurrence ends the game.
        let board = BoardState::from_pieces(&[
            (Square::new(7, 4), Piece::new(Side::Light, PieceKind::King)),
            (Square::new(0, 0), Piece::new(Side::Dark, PieceKind::King)),
        ]);
        let mut light = ScriptedEngine::new(&[
            mv((7, 4), (7, 3)),
            mv((7, 3), (7, 4)),
            mv((7, 4), (7, 3)),
            mv((7, 3), (7, 4)),
            mv((7, 4), (7, 3)),
        ]);
        let mut dark = ScriptedEngine::new(&[
            mv((0, 0), (0, 1)),
            mv((0, 1), (0, 0)),
            mv((0, 0), (0, 1)),
            mv((0, 1), (0, 0)),
        ]);
        let report = play_match(
            &mut light,
            &mut dark,
            &board,
            Side::Light,
            &MatchConfig::default(),
        )
        .expect("match should run");
        assert_eq!(report.outcome, MatchOutcome::RepetitionDraw);
        assert_eq!(report.plies, 8);
    }

    #[test]
    fn pawn_capture_classified_as_pawn_lost() {
        let board = BoardState::from_pieces(&[
            (Square::new(7, 0), Piece::new(Side::Light, PieceKind::King)),
            (Square::new(3, 3), Piece::new(Side::Dark, PieceKind::King)),
            (Square::new(4, 4), Piece::new(Side::Light, PieceKind::Pawn)),
        ]);
        let mut light = MinimaxEngine::new(GameConfig::with_pawn());
        let mut dark = MinimaxEngine::new(GameConfig::with_pawn());
        // At depth 2 the immediate capture is the only move that wins the
        // pawn within the horizon, so the game ends on the first ply.
        let config = MatchConfig {
            dark_depth: Some(2),
            ..MatchConfig::default()
        };
        let report = play_match(&mut light, &mut dark, &board, Side::Dark, &config)
            .expect("match should run");
        assert_eq!(report.outcome, MatchOutcome::PawnLost);
        assert_eq!(report.plies, 1);
    }

    #[test]
    fn promotion_takes_precedence_over_mate_classification() {
        // Once Light's queen is on the board the game is already decided;
        // the mate the queen delivers never needs classifying.
        let mate_with_queen = BoardState::from_pieces(&[
            (Square::new(2, 1), Piece::new(Side::Light, PieceKind::King)),
            (Square::new(0, 7), Piece::new(Side::Light, PieceKind::Queen)),
            (Square::new(0, 0), Piece::new(Side::Dark, PieceKind::King)),
        ]);
        assert_eq!(
            terminal_state(
                &mate_with_queen,
                Side::Dark,
                &GameConfig::with_pawn(),
                &RepetitionTracker::new()
            ),
            Some(MatchOutcome::PromotionWin)
        );
    }

    #[test]
    fn checkmate_and_stalemate_classified_without_search() {
        let config = GameConfig::bare_kings();
        let tracker = RepetitionTracker::new();

        // Mirror-image mate against Light, so no Light promotion masks it.
        let mate = BoardState::from_pieces(&[
            (Square::new(5, 1), Piece::new(Side::Dark, PieceKind::King)),
            (Square::new(7, 7), Piece::new(Side::Dark, PieceKind::Queen)),
            (Square::new(7, 0), Piece::new(Side::Light, PieceKind::King)),
        ]);
        assert_eq!(
            terminal_state(&mate, Side::Light, &config, &tracker),
            Some(MatchOutcome::Checkmate {
                winner: Side::Dark
            })
        );

        let stale = BoardState::from_pieces(&[
            (Square::new(2, 4), Piece::new(Side::Light, PieceKind::King)),
            (Square::new(1, 4), Piece::new(Side::Light, PieceKind::Pawn)),
            (Square::new(0, 4), Piece::new(Side::Dark, PieceKind::King)),
        ]);
        let with_pawn = GameConfig::with_pawn();
        assert_eq!(
            terminal_state(&stale, Side::Dark, &with_pawn, &tracker),
            Some(MatchOutcome::Stalemate)
        );
    }
}
