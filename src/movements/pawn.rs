//! Pawn candidate movement generation.

use crate::board::Board;
use crate::board_cell::{move_board_cell, BoardCell};
use crate::piece_record::PieceRecord;

/// Generates the candidate movements for a pawn.
///
/// Forward geometry: one cell toward the opposing side, two cells from the
/// team's starting row. The forward scan halts at the first occupied cell,
/// so a blocked single step also rules out the double step. Captures are
/// diagonal-forward only and require a hostile occupant; a diagonal move
/// onto an empty cell is never produced.
pub fn generate_pawn_movements(board: &Board, piece: &PieceRecord) -> Vec<BoardCell> {
    let mut movements = Vec::new();
    let forward = piece.team.forward_direction();

    for step in [1i8, 2i8] {
        if step == 2 && piece.cell.0 != piece.team.pawn_start_row() {
            break;
        }
        match move_board_cell(&piece.cell, forward * step, 0) {
            Ok(ahead) => {
                if board.collision_at(ahead).is_some() {
                    break;
                }
                movements.push(ahead);
            }
            Err(_) => break,
        }
    }

    for d_col in [-1i8, 1i8] {
        if let Ok(diagonal) = move_board_cell(&piece.cell, forward, d_col) {
            if let Some(occupant_team) = board.collision_at(diagonal) {
                if occupant_team != piece.team {
                    movements.push(diagonal);
                }
            }
        }
    }

    movements
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::piece_record::PieceTeam;
    use crate::team_setup::standard_board;

    #[test]
    fn double_step_from_start_row() -> Result<(), ChessErrors> {
        let board = standard_board()?;
        let pawn = *board.view_piece(board.occupant((6, 4)).unwrap())?;
        let movements = generate_pawn_movements(&board, &pawn);
        assert_eq!(movements, vec![(5, 4), (4, 4)]);

        let black_pawn = *board.view_piece(board.occupant((1, 2)).unwrap())?;
        let movements = generate_pawn_movements(&board, &black_pawn);
        assert_eq!(movements, vec![(2, 2), (3, 2)]);
        Ok(())
    }

    #[test]
    fn blocked_single_step_halts_everything_forward() -> Result<(), ChessErrors> {
        let mut board = standard_board()?;
        // Park a black pawn directly in front of the white e-pawn.
        let blocker = board.occupant((1, 4)).unwrap();
        board.confirm_movement(blocker, (5, 4))?;

        let pawn = *board.view_piece(board.occupant((6, 4)).unwrap())?;
        let movements = generate_pawn_movements(&board, &pawn);
        // Only the diagonal capture of the blocker's neighbors would count,
        // and there are none: forward play is completely shut down.
        assert!(movements.is_empty());
        Ok(())
    }

    #[test]
    fn blocked_double_step_cell_still_allows_single() -> Result<(), ChessErrors> {
        let mut board = standard_board()?;
        let blocker = board.occupant((1, 4)).unwrap();
        board.confirm_movement(blocker, (4, 4))?;

        let pawn = *board.view_piece(board.occupant((6, 4)).unwrap())?;
        assert_eq!(generate_pawn_movements(&board, &pawn), vec![(5, 4)]);
        Ok(())
    }

    #[test]
    fn captures_are_diagonal_and_hostile_only() -> Result<(), ChessErrors> {
        let mut board = standard_board()?;
        let victim = board.occupant((1, 3)).unwrap();
        board.confirm_movement(victim, (5, 3))?;

        let pawn = *board.view_piece(board.occupant((6, 4)).unwrap())?;
        let movements = generate_pawn_movements(&board, &pawn);
        assert!(movements.contains(&(5, 3)));
        // Empty diagonal on the other side is not offered.
        assert!(!movements.contains(&(5, 5)));
        assert_eq!(pawn.team, PieceTeam::White);
        Ok(())
    }

    #[test]
    fn no_capture_of_teammates() -> Result<(), ChessErrors> {
        let mut board = standard_board()?;
        let friend = board.occupant((6, 3)).unwrap();
        board.confirm_movement(friend, (5, 3))?;

        let pawn = *board.view_piece(board.occupant((6, 4)).unwrap())?;
        let movements = generate_pawn_movements(&board, &pawn);
        assert!(!movements.contains(&(5, 3)));
        Ok(())
    }
}
