//! King candidate movement generation.

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::movements::shared::try_step;
use crate::piece_record::PieceRecord;

/// The eight adjacent offsets, counter-clockwise from east.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates the candidate movements for a king: each adjacent cell that is
/// on the board and not held by a teammate. Check safety is not considered
/// here; the move-safety probe filters unsafe king steps like any other
/// candidate.
pub fn generate_king_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    let mut movements = Vec::new();
    for (d_row, d_col) in KING_OFFSETS {
        try_step(board, piece.team, piece.cell, d_row, d_col, &mut movements);
    }
    movements
}
