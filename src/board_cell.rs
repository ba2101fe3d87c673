use crate::chess_errors::ChessErrors;

/// A `(row, col)` coordinate pair on the 8x8 grid, each component in `0..=7`.
///
/// Row 0 is the black back row; row 7 is the white back row. White pawns
/// advance toward decreasing rows, black pawns toward increasing rows.
pub type BoardCell = (i8, i8);

/// Returns true iff both coordinates of the cell lie inside the board.
pub fn is_valid_position(x: &BoardCell) -> bool {
    !((x.0 < 0) | (x.0 > 7) | (x.1 < 0) | (x.1 > 7))
}

/// Offsets a board cell by a row and column delta.
///
/// # Arguments
///
/// * `x` - The current board cell.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardCell, ChessErrors>` - Returns the new cell if within
///   bounds, otherwise `TriedToMoveOutOfBounds`.
pub fn move_board_cell(x: &BoardCell, d_row: i8, d_col: i8) -> Result<BoardCell, ChessErrors> {
    let y: BoardCell = (x.0 + d_row, x.1 + d_col);
    if is_valid_position(&y) {
        Ok(y)
    } else {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_row, d_col)))
    }
}
