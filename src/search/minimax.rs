//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Light, the promoting side, maximizes; Dark minimizes. The tree is
//! explored depth-first on deep copies of the board, one clone per ply, so
//! no frame ever aliases a state visible to an ancestor or to the caller.
//! There is no move ordering and no transposition table; ties on the best
//! score keep the first move found in canonical enumeration order.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{EndgameMove, PieceKind, Side};
use crate::game_state::game_config::GameConfig;
use crate::move_generation::attack_checks::is_attacked;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{
    evaluate, Score, CHECKMATE_SCORE, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};
use crate::search::repetition::RepetitionTracker;

/// Outcome of a search call: the minimax score and the chosen move. The
/// move is `None` exactly at terminal nodes (decided position, exhausted
/// depth, or no legal moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    pub best: Option<EndgameMove>,
}

impl SearchResult {
    const fn terminal(score: Score) -> Self {
        SearchResult { score, best: None }
    }
}

/// Search entry point: pick the best move for `side` looking `depth` plies
/// ahead. The tracker, when supplied, only feeds the evaluator's
/// repetition-draw override; the search never records positions into it.
pub fn best_move(
    board: &BoardState,
    side: Side,
    depth: u8,
    config: &GameConfig,
    tracker: Option<&RepetitionTracker>,
) -> SearchResult {
    search(board, side, depth, i32::MIN, i32::MAX, config, tracker)
}

fn search(
    board: &BoardState,
    side: Side,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    config: &GameConfig,
    tracker: Option<&RepetitionTracker>,
) -> SearchResult {
    // Decided positions end the search regardless of remaining depth.
    if board.has_promoted(Side::Light) {
        return SearchResult::terminal(WIN_SCORE);
    }
    if config.light_had_pawn && !board.contains(Side::Light, PieceKind::Pawn) {
        return SearchResult::terminal(LOSS_SCORE);
    }

    if depth == 0 {
        return SearchResult::terminal(evaluate(board, config, tracker));
    }

    let moves = legal_moves(board, side);
    if moves.is_empty() {
        if is_attacked(board, side) {
            // Checkmate, signed against the side to move.
            let score = match side {
                Side::Light => -CHECKMATE_SCORE,
                Side::Dark => CHECKMATE_SCORE,
            };
            return SearchResult::terminal(score);
        }
        return SearchResult::terminal(DRAW_SCORE);
    }

    let maximizing = side == Side::Light;
    let mut best: Option<EndgameMove> = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let next = apply_move(board, mv);
        let child = search(
            &next,
            side.opposite(),
            depth - 1,
            alpha,
            beta,
            config,
            tracker,
        );

        if maximizing {
            if child.score > best_score {
                best_score = child.score;
                best = Some(mv);
            }
            if best_score > alpha {
                alpha = best_score;
            }
        } else {
            if child.score < best_score {
                best_score = child.score;
                best = Some(mv);
            }
            if best_score < beta {
                beta = best_score;
            }
        }

        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        score: best_score,
        best,
    }
}
