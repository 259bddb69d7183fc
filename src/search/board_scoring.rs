//! Static board evaluation for the promoting side.
//!
//! Scores are signed integers from Light's perspective; larger is better
//! for Light. Two sentinel outcomes dominate everything: promotion achieved
//! and pawn lost. Below those, the score is a weighted sum of hand-tuned
//! positional features about the pawn's march and both kings' placement.
//! The weights are empirical tuning values; they affect playing strength
//! only, never legality or terminal classification, and are kept as named
//! constants rather than "improved" guesses.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::game_config::GameConfig;
use crate::search::repetition::RepetitionTracker;

/// Numeric representation of an evaluation score. Positive favors Light.
pub type Score = i32;

/// Returned once Light's pawn has promoted (or stands on the promotion rank).
pub const WIN_SCORE: Score = 100_000;
/// Returned when Light started with a pawn and has lost it before promoting.
pub const LOSS_SCORE: Score = -200_000;
/// Search sentinel for checkmate, signed against the side to move. Dominates
/// both fixed outcomes above.
pub const CHECKMATE_SCORE: Score = 1_000_000;
/// Stalemate and repetition draws score as dead equality.
pub const DRAW_SCORE: Score = 0;

/// Per-rank penalty for the pawn's remaining distance to the promotion rank.
pub const PAWN_DISTANCE_PENALTY: Score = 40;
/// Heavy penalty when the enemy king attacks the pawn and the friendly king
/// does not defend it.
pub const PAWN_HANGING_PENALTY: Score = 4_000;
/// Bonus for a defended pawn.
pub const PAWN_GUARDED_BONUS: Score = 600;
/// Reduced bonus when the defended pawn is simultaneously attacked.
pub const PAWN_GUARDED_CONTESTED_BONUS: Score = 300;
/// Per-step penalty on the Manhattan distance between Light's king and pawn.
pub const KING_PAWN_DISTANCE_PENALTY: Score = 25;
/// Bonus when Light's king stands directly in front of the pawn.
pub const KING_ESCORT_BONUS: Score = 500;
/// Penalty when the enemy king blocks or flanks the pawn's remaining path.
pub const PATH_BLOCK_PENALTY: Score = 700;
/// Per-step bonus on the enemy king's Manhattan distance from the promotion
/// square on the pawn's file.
pub const ENEMY_KING_PROMOTION_DISTANCE_BONUS: Score = 30;
/// Penalty when Light's king idles on its back rank while the pawn has not
/// crossed the midline.
pub const PASSIVE_KING_PENALTY: Score = 350;

/// Rank the pawn must clear before the passive-king penalty stops applying.
const MIDLINE_RANK: i8 = 4;

/// Evaluate `board` from Light's perspective.
///
/// Priority order: promotion achieved, pawn lost, repetition-forced draw
/// (only when a tracker is supplied and the position already stood twice),
/// then the positional sum. The tracker parameter is the opt-in for
/// repetition-aware scoring; plain search passes `None`.
pub fn evaluate(
    board: &BoardState,
    config: &GameConfig,
    tracker: Option<&RepetitionTracker>,
) -> Score {
    if board.has_promoted(Side::Light) {
        return WIN_SCORE;
    }

    if config.light_had_pawn && !board.contains(Side::Light, PieceKind::Pawn) {
        return LOSS_SCORE;
    }

    // A third occurrence during lookahead would be a draw; pre-empt it once
    // the position already stood twice in the real game.
    if let Some(tracker) = tracker {
        if tracker.count(board) >= 2 {
            return DRAW_SCORE;
        }
    }

    positional_score(board)
}

fn positional_score(board: &BoardState) -> Score {
    let Some(pawn_sq) = board.find(Side::Light, PieceKind::Pawn) else {
        // Bare-kings setups have no positional features to weigh.
        return DRAW_SCORE;
    };
    let (Some(light_king), Some(dark_king)) = (
        board.king_square(Side::Light),
        board.king_square(Side::Dark),
    ) else {
        return DRAW_SCORE;
    };

    let mut score: Score = 0;

    // Distance left to the promotion rank (rank 0).
    score -= PAWN_DISTANCE_PENALTY * Score::from(pawn_sq.rank);

    let attacked = dark_king.chebyshev_distance(pawn_sq) == 1;
    let defended = light_king.chebyshev_distance(pawn_sq) == 1;
    if attacked && !defended {
        score -= PAWN_HANGING_PENALTY;
    } else if defended {
        score += if attacked {
            PAWN_GUARDED_CONTESTED_BONUS
        } else {
            PAWN_GUARDED_BONUS
        };
    }

    score -= KING_PAWN_DISTANCE_PENALTY * Score::from(light_king.manhattan_distance(pawn_sq));

    if pawn_sq.offset(Side::Light.pawn_step(), 0) == Some(light_king) {
        score += KING_ESCORT_BONUS;
    }

    if enemy_king_obstructs_path(pawn_sq, dark_king) {
        score -= PATH_BLOCK_PENALTY;
    }

    let promotion_square = Square::new(Side::Light.promotion_rank(), pawn_sq.file);
    score += ENEMY_KING_PROMOTION_DISTANCE_BONUS
        * Score::from(dark_king.manhattan_distance(promotion_square));

    if light_king.rank == Side::Light.back_rank() && pawn_sq.rank >= MIDLINE_RANK {
        score -= PASSIVE_KING_PENALTY;
    }

    score
}

/// True when the enemy king stands on, or adjacent to, any square of the
/// pawn's remaining path to promotion.
fn enemy_king_obstructs_path(pawn_sq: Square, dark_king: Square) -> bool {
    (0..pawn_sq.rank)
        .map(|rank| Square::new(rank, pawn_sq.file))
        .any(|path_sq| dark_king.chebyshev_distance(path_sq) <= 1)
}
