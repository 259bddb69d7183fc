//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! (rank, file) representation. Internal rank 0 is the 8th rank (Light's
//! promotion rank), so displayed rank is `8 - rank`.

use crate::chess_errors::EndgameErrors;
use crate::game_state::chess_types::{EndgameMove, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, EndgameErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(EndgameErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(EndgameErrors::InvalidAlgebraicString(text.to_owned()));
    }

    Ok(Square::new((b'8' - rank) as i8, (file - b'a') as i8))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file as u8);
    let rank_char = char::from(b'8' - square.rank as u8);
    format!("{file_char}{rank_char}")
}

/// Render a move as origin-destination coordinates, for example "e2e4".
pub fn move_to_algebraic(mv: EndgameMove) -> String {
    format!(
        "{}{}",
        square_to_algebraic(mv.from),
        square_to_algebraic(mv.to)
    )
}

/// Parse origin-destination coordinates (for example "e2e4") into a move.
pub fn algebraic_to_move(text: &str) -> Result<EndgameMove, EndgameErrors> {
    if text.len() != 4 {
        return Err(EndgameErrors::InvalidAlgebraicString(text.to_owned()));
    }
    let (from, to) = text.split_at(2);
    Ok(EndgameMove::new(
        algebraic_to_square(from)?,
        algebraic_to_square(to)?,
    ))
}
