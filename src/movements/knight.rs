//! Knight candidate movement generation.

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::movements::shared::try_step;
use crate::piece_record::PieceRecord;

/// The eight L-shaped offsets, counter-clockwise from east-north-east.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
];

/// Generates the candidate movements for a knight: each offset destination
/// that is on the board and not held by a teammate. Knights are the only
/// class that ignores intervening pieces.
pub fn generate_knight_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    let mut movements = Vec::new();
    for (d_row, d_col) in KNIGHT_OFFSETS {
        try_step(board, piece.team, piece.cell, d_row, d_col, &mut movements);
    }
    movements
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::team_setup::standard_board;

    #[test]
    fn knight_jumps_over_the_pawn_wall() -> Result<(), ChessErrors> {
        let board = standard_board()?;
        let knight = *board.view_piece(board.occupant((7, 1)).unwrap())?;
        let mut movements = generate_knight_movements(&board, &knight);
        movements.sort();
        assert_eq!(movements, vec![(5, 0), (5, 2)]);
        Ok(())
    }

    #[test]
    fn knight_mid_board_reaches_all_free_offsets() -> Result<(), ChessErrors> {
        let mut board = standard_board()?;
        let knight_id = board.occupant((7, 1)).unwrap();
        board.confirm_movement(knight_id, (4, 4))?;

        let knight = *board.view_piece(knight_id)?;
        let mut movements = generate_knight_movements(&board, &knight);
        movements.sort();
        // (6,3) and (6,5) hold white pawns; the other six offsets are open.
        assert_eq!(
            movements,
            vec![(2, 3), (2, 5), (3, 2), (3, 6), (5, 2), (5, 6)]
        );
        Ok(())
    }
}
