//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the demo
//! binary. Light pieces render uppercase, Dark pieces lowercase.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Render the board to a string for terminal output, 8th rank on top.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8 {
        let rank_label = char::from(b'8' - rank as u8);
        out.push(rank_label);
        out.push(' ');

        for file in 0..8 {
            match board.piece_at(Square::new(rank, file)) {
                Some(piece) => out.push(piece_char(piece)),
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::King => 'k',
        PieceKind::Pawn => 'p',
        PieceKind::Queen => 'q',
    };
    match piece.side {
        Side::Light => ch.to_ascii_uppercase(),
        Side::Dark => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pieces_on_their_displayed_ranks() {
        let board = BoardState::from_pieces(&[
            (Square::new(7, 4), Piece::new(Side::Light, PieceKind::King)),
            (Square::new(0, 4), Piece::new(Side::Dark, PieceKind::King)),
            (Square::new(6, 4), Piece::new(Side::Light, PieceKind::Pawn)),
        ]);
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        // Rank 8 (internal rank 0) holds the Dark king on the e-file.
        assert!(lines[1].starts_with('8') && lines[1].contains('k'));
        assert!(lines[7].starts_with('2') && lines[7].contains('P'));
        assert!(lines[8].starts_with('1') && lines[8].contains('K'));
    }
}
