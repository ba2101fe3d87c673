//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of the live grid for debugging, tests, and
//! the exhibition driver's game log. Purely a read-only convenience; the
//! engine itself never needs it.

use crate::board::Board;
use crate::piece_record::{PieceClass, PieceTeam};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (the black back row) is printed first, matching the engine's
/// row/col orientation.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..8 {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..8 {
            match board
                .occupant((row, col))
                .and_then(|id| board.view_piece(id).ok())
            {
                Some(record) => out.push(piece_to_unicode(record.team, record.class)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn piece_to_unicode(team: PieceTeam, class: PieceClass) -> char {
    match (team, class) {
        (PieceTeam::White, PieceClass::Pawn) => '♙',
        (PieceTeam::White, PieceClass::Knight) => '♘',
        (PieceTeam::White, PieceClass::Bishop) => '♗',
        (PieceTeam::White, PieceClass::Rook) => '♖',
        (PieceTeam::White, PieceClass::Queen) => '♕',
        (PieceTeam::White, PieceClass::King) => '♔',
        (PieceTeam::Black, PieceClass::Pawn) => '♟',
        (PieceTeam::Black, PieceClass::Knight) => '♞',
        (PieceTeam::Black, PieceClass::Bishop) => '♝',
        (PieceTeam::Black, PieceClass::Rook) => '♜',
        (PieceTeam::Black, PieceClass::Queen) => '♛',
        (PieceTeam::Black, PieceClass::King) => '♚',
    }
}
