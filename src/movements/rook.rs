//! Rook candidate movement generation.

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::movements::shared::walk_ray;
use crate::piece_record::PieceRecord;

/// The four orthogonal ray directions, counter-clockwise from east.
pub(crate) const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];

/// Generates the candidate movements for a rook: four orthogonal rays with
/// the same edge/blocker/capture policy as every slider.
pub fn generate_rook_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    let mut movements = Vec::new();
    for (d_row, d_col) in ORTHOGONAL_DIRECTIONS {
        walk_ray(board, piece.team, piece.cell, d_row, d_col, &mut movements);
    }
    movements
}
