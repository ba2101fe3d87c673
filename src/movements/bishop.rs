//! Bishop candidate movement generation.

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::movements::shared::walk_ray;
use crate::piece_record::PieceRecord;

/// The four diagonal ray directions, counter-clockwise from north-east.
pub(crate) const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, -1), (1, 1)];

/// Generates the candidate movements for a bishop: four diagonal rays, each
/// extending to the board edge, stopping short of a teammate, or ending on
/// a hostile piece as a capture.
pub fn generate_bishop_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    let mut movements = Vec::new();
    for (d_row, d_col) in DIAGONAL_DIRECTIONS {
        walk_ray(board, piece.team, piece.cell, d_row, d_col, &mut movements);
    }
    movements
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::team_setup::standard_board;

    #[test]
    fn bishop_is_boxed_in_at_start() -> Result<(), ChessErrors> {
        let board = standard_board()?;
        let bishop = *board.view_piece(board.occupant((7, 2)).unwrap())?;
        assert!(generate_bishop_movements(&board, &bishop).is_empty());
        Ok(())
    }

    #[test]
    fn diagonal_ray_includes_capture_and_stops_there() -> Result<(), ChessErrors> {
        let mut board = standard_board()?;
        let bishop_id = board.occupant((7, 2)).unwrap();
        board.confirm_movement(bishop_id, (4, 2))?;

        let bishop = *board.view_piece(bishop_id)?;
        let movements = generate_bishop_movements(&board, &bishop);
        // North-east ray: (3,3), (2,4), then the black pawn on (1,5).
        assert!(movements.contains(&(3, 3)));
        assert!(movements.contains(&(2, 4)));
        assert!(movements.contains(&(1, 5)));
        // Nothing behind the pawn.
        assert!(!movements.contains(&(0, 6)));
        // South-west ray is blocked by the white pawn on (6,0) after (5,1).
        assert!(movements.contains(&(5, 1)));
        assert!(!movements.contains(&(6, 0)));
        Ok(())
    }
}
