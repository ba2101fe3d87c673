//! In-memory board state.
//!
//! `Board` owns the piece registry, an 8x8 grid of cell contents, and the
//! turn counter, and it provides every mutation the engine performs: initial
//! placement, capture, move commitment, and the relocate/restore primitives
//! the hypothetical-move prober is built on. A piece's `cell` field is the
//! single source of truth for its position; the grid is a derived index that
//! every mutation keeps in sync. The board never touches a rendering
//! surface; presentation layers re-read state through the accessors after
//! each command.

use crate::board_cell::{is_valid_position, BoardCell};
use crate::chess_errors::ChessErrors;
use crate::piece_record::{PieceId, PieceRecord, PieceTeam};
use crate::piece_register::PieceRegister;

#[derive(Clone, Debug)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
    register: PieceRegister,
    turn_counter: u32,
}

impl Board {
    /// Validates the two rosters, builds the registry, and places every
    /// piece on its home cell with the turn counter at 1 (white to move).
    pub fn new(
        black_pieces: Vec<PieceRecord>,
        white_pieces: Vec<PieceRecord>,
    ) -> Result<Self, ChessErrors> {
        let register = PieceRegister::from_teams(black_pieces, white_pieces)?;
        let mut board = Board {
            grid: [[None; 8]; 8],
            register,
            turn_counter: 1,
        };
        board.reset()?;
        Ok(board)
    }

    /// Puts the game back to its starting state: every registry piece is
    /// revived and placed on its home cell, and the turn counter returns
    /// to 1.
    pub fn reset(&mut self) -> Result<(), ChessErrors> {
        self.grid = [[None; 8]; 8];
        self.turn_counter = 1;

        let ids: Vec<PieceId> = self.register.iter().map(|record| record.id).collect();
        for id in ids {
            let home = {
                let record = self.register.edit_piece(id)?;
                record.is_alive = true;
                record.cell = record.home_cell;
                record.home_cell
            };
            if self.occupant(home).is_some() {
                return Err(ChessErrors::StartingCellOccupied(home));
            }
            self.grid[home.0 as usize][home.1 as usize] = Some(id);
        }
        Ok(())
    }

    /// The team whose turn it is: odd counter values are white, even black.
    pub fn turn_team(&self) -> PieceTeam {
        if self.turn_counter % 2 != 0 {
            PieceTeam::White
        } else {
            PieceTeam::Black
        }
    }

    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    pub fn register(&self) -> &PieceRegister {
        &self.register
    }

    /// Immutable record lookup by id.
    pub fn view_piece(&self, id: PieceId) -> Result<&PieceRecord, ChessErrors> {
        self.register.view_piece(id)
    }

    /// Id of the living piece on `cell`, if any. Off-board cells are empty.
    pub fn occupant(&self, cell: BoardCell) -> Option<PieceId> {
        if !is_valid_position(&cell) {
            return None;
        }
        self.grid[cell.0 as usize][cell.1 as usize]
    }

    /// Collision probe used by the movement generators: `None` when `cell`
    /// is empty, otherwise the team of the living piece occupying it.
    pub fn collision_at(&self, cell: BoardCell) -> Option<PieceTeam> {
        let id = self.occupant(cell)?;
        self.register.view_piece(id).ok().map(|record| record.team)
    }

    /// Moves a living piece to `to`, vacating its previous cell and updating
    /// both the record and the grid. The destination must be empty; captures
    /// are performed separately via [`Board::capture_at`].
    pub(crate) fn relocate(&mut self, id: PieceId, to: BoardCell) -> Result<(), ChessErrors> {
        let from = {
            let record = self.register.view_piece(id)?;
            if !record.is_alive {
                return Err(ChessErrors::PieceNotAlive(id));
            }
            record.cell
        };
        self.grid[from.0 as usize][from.1 as usize] = None;
        self.grid[to.0 as usize][to.1 as usize] = Some(id);
        self.register.edit_piece(id)?.cell = to;
        Ok(())
    }

    /// Captures the piece on `cell`: the occupant is marked dead and removed
    /// from the grid, but stays in the registry for lookup by id. Its `cell`
    /// field keeps the capture cell, which is what the hypothetical-move
    /// prober relies on to resurrect it in place.
    pub fn capture_at(&mut self, cell: BoardCell) -> Result<PieceId, ChessErrors> {
        let id = self
            .occupant(cell)
            .ok_or(ChessErrors::CaptureOnEmptyCell(cell))?;
        self.register.edit_piece(id)?.is_alive = false;
        self.grid[cell.0 as usize][cell.1 as usize] = None;
        Ok(id)
    }

    /// Undoes a capture performed by [`Board::capture_at`]: the piece comes
    /// back to life on the cell it was captured on.
    pub(crate) fn restore_captured(&mut self, id: PieceId) -> Result<(), ChessErrors> {
        let cell = {
            let record = self.register.edit_piece(id)?;
            record.is_alive = true;
            record.cell
        };
        self.grid[cell.0 as usize][cell.1 as usize] = Some(id);
        Ok(())
    }

    /// Commits a move: captures the destination occupant if there is one,
    /// relocates the piece, and advances the turn counter.
    ///
    /// Legality is not re-checked here. Callers must only pass destinations
    /// previously produced by [`crate::move_safety::safe_movements`].
    pub fn confirm_movement(
        &mut self,
        id: PieceId,
        destination: BoardCell,
    ) -> Result<(), ChessErrors> {
        if self.occupant(destination).is_some() {
            self.capture_at(destination)?;
        }
        self.relocate(id, destination)?;
        self.turn_counter += 1;
        Ok(())
    }

    /// Test support: empties the grid and marks every piece dead, so sparse
    /// tactical positions can be assembled with [`Board::revive_at`].
    #[cfg(test)]
    pub(crate) fn clear_all_pieces(&mut self) -> Result<(), ChessErrors> {
        let ids: Vec<PieceId> = self.register.iter().map(|record| record.id).collect();
        for id in ids {
            self.register.edit_piece(id)?.is_alive = false;
        }
        self.grid = [[None; 8]; 8];
        Ok(())
    }

    /// Test support: revives a registry piece on an arbitrary empty cell.
    #[cfg(test)]
    pub(crate) fn revive_at(&mut self, id: PieceId, cell: BoardCell) -> Result<(), ChessErrors> {
        if self.occupant(cell).is_some() {
            return Err(ChessErrors::StartingCellOccupied(cell));
        }
        let record = self.register.edit_piece(id)?;
        record.is_alive = true;
        record.cell = cell;
        self.grid[cell.0 as usize][cell.1 as usize] = Some(id);
        Ok(())
    }

    /// Test support: forces the turn counter, for positions where black is
    /// to move.
    #[cfg(test)]
    pub(crate) fn set_turn_counter(&mut self, value: u32) {
        self.turn_counter = value;
    }
}
