//! Helpers shared by the per-class movement generators, plus the class
//! dispatch.
//!
//! Candidate movements are raw geometry: every cell a piece could reach on
//! the current board, honoring collisions and captures but ignoring whether
//! the move would leave the mover's own king in check. That filtering
//! belongs to `move_safety`.

use crate::board::Board;
use crate::board_cell::{move_board_cell, BoardCell};
use crate::movements::{bishop, king, knight, pawn, queen, rook};
use crate::piece_record::{PieceClass, PieceRecord, PieceTeam};

/// Generates every candidate destination for `piece` on `board`,
/// dispatching on its class.
pub fn generate_candidate_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    match piece.class {
        PieceClass::Pawn => pawn::generate_pawn_movements(board, piece),
        PieceClass::Knight => knight::generate_knight_movements(board, piece),
        PieceClass::Bishop => bishop::generate_bishop_movements(board, piece),
        PieceClass::Rook => rook::generate_rook_movements(board, piece),
        PieceClass::Queen => queen::generate_queen_movements(board, piece),
        PieceClass::King => king::generate_king_movements(board, piece),
    }
}

/// Walks one ray from `start` by repeated `(d_row, d_col)` steps, pushing
/// reachable cells into `out`.
///
/// The ray stops the instant it reaches the board edge or an occupied cell;
/// an occupied cell is itself included only when its occupant is hostile to
/// `team` (a capture). Rays never jump pieces.
pub(crate) fn walk_ray(
    board: &Board,
    team: PieceTeam,
    start: BoardCell,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<BoardCell>,
) {
    let mut cursor = start;
    while let Ok(next) = move_board_cell(&cursor, d_row, d_col) {
        match board.collision_at(next) {
            None => out.push(next),
            Some(occupant_team) => {
                if occupant_team != team {
                    out.push(next);
                }
                return;
            }
        }
        cursor = next;
    }
}

/// Pushes the single cell `(d_row, d_col)` away from `start` into `out` if
/// it is on the board and not occupied by a piece of `team`. Used by the
/// fixed-offset pieces (knight, king).
pub(crate) fn try_step(
    board: &Board,
    team: PieceTeam,
    start: BoardCell,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<BoardCell>,
) {
    if let Ok(next) = move_board_cell(&start, d_row, d_col) {
        match board.collision_at(next) {
            None => out.push(next),
            Some(occupant_team) => {
                if occupant_team != team {
                    out.push(next);
                }
            }
        }
    }
}
