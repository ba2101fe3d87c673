//! Queen candidate movement generation.

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::movements::bishop::DIAGONAL_DIRECTIONS;
use crate::movements::rook::ORTHOGONAL_DIRECTIONS;
use crate::movements::shared::walk_ray;
use crate::piece_record::PieceRecord;

/// Generates the candidate movements for a queen: the union of the bishop's
/// diagonal rays and the rook's orthogonal rays, eight rays total.
pub fn generate_queen_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    let mut movements = Vec::new();
    for (d_row, d_col) in DIAGONAL_DIRECTIONS.iter().chain(ORTHOGONAL_DIRECTIONS.iter()) {
        walk_ray(board, piece.team, piece.cell, *d_row, *d_col, &mut movements);
    }
    movements
}
