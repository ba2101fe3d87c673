//! Buffered plain-text game log.
//!
//! The engine itself stays silent; drivers that want a record of a session
//! append to a `GameLog` and flush it to disk (or stdout) when the game
//! ends. The log opens with a wall-clock header so saved sessions can be
//! told apart.

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::piece_record::PieceRecord;
use crate::render_board::render_board;

#[derive(Debug)]
pub struct GameLog {
    buffer: String,
}

impl GameLog {
    pub fn new() -> Self {
        let mut log = GameLog {
            buffer: String::with_capacity(16 * 1024),
        };
        log.log("=== Parlor Chess game log ===");
        log.log(&format!(
            "Started: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        log
    }

    /// Appends one line to the log.
    pub fn log(&mut self, message: &str) {
        self.buffer.push_str(message);
        self.buffer.push('\n');
    }

    /// Records a committed movement, including any capture.
    pub fn log_movement(
        &mut self,
        turn: u32,
        mover: &PieceRecord,
        from: BoardCell,
        to: BoardCell,
        captured: Option<&PieceRecord>,
    ) {
        let mut line = format!(
            "{}. {:?} {:?} {:?} -> {:?}",
            turn, mover.team, mover.class, from, to
        );
        if let Some(victim) = captured {
            line.push_str(&format!(" takes {:?} {:?}", victim.team, victim.class));
        }
        self.log(&line);
    }

    /// Appends a rendered snapshot of the board.
    pub fn log_board(&mut self, board: &Board) {
        let view = render_board(board);
        self.log(&view);
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Writes the whole log to a file.
    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, &self.buffer)
    }
}

impl Default for GameLog {
    fn default() -> Self {
        GameLog::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::team_setup::standard_board;

    #[test]
    fn log_collects_lines_in_order() -> Result<(), ChessErrors> {
        let board = standard_board()?;
        let mut dut = GameLog::new();
        let mover = *board.view_piece(board.occupant((6, 4)).unwrap())?;
        dut.log_movement(1, &mover, (6, 4), (4, 4), None);
        dut.log_board(&board);

        let contents = dut.contents();
        assert!(contents.starts_with("=== Parlor Chess game log ==="));
        assert!(contents.contains("1. White Pawn (6, 4) -> (4, 4)"));
        assert!(contents.contains('♟'));
        Ok(())
    }
}
