//! Move legality: the make/test/unmake probe and everything built on it.
//!
//! This is the central algorithm of the engine. A candidate movement is
//! "safe" iff performing it would not leave the mover's own king in check.
//! The probe relocates the piece in the live board state (capturing the
//! destination occupant when there is one), re-runs the check scan, and then
//! unconditionally restores the previous state, so the real game state is
//! identical to before the call on every path. There is no memoization: the
//! probe runs once per candidate, for every piece, every time a legal-move
//! list or a checkmate verdict is needed. At 32 pieces on an 8x8 grid that
//! re-evaluation is cheap enough to keep the code this direct.

use crate::board::Board;
use crate::board_cell::BoardCell;
use crate::check_inspection::inspect_check;
use crate::chess_errors::ChessErrors;
use crate::movements::shared::generate_candidate_movements;
use crate::piece_record::{PieceId, PieceTeam};

/// Probes one candidate movement for self-check safety.
///
/// The board is mutated transactionally: speculatively relocate (and capture
/// if the destination is occupied), inspect, then restore the mover and
/// resurrect any captured piece in place. A movement is valid iff the
/// mover's own king is not in check afterward; a check against the opposing
/// king does not invalidate it.
pub fn is_valid_movement(
    board: &mut Board,
    id: PieceId,
    destination: BoardCell,
) -> Result<bool, ChessErrors> {
    let (team, origin) = {
        let record = board.view_piece(id)?;
        if !record.is_alive {
            return Err(ChessErrors::PieceNotAlive(id));
        }
        (record.team, record.cell)
    };

    let captured = match board.occupant(destination) {
        Some(_) => Some(board.capture_at(destination)?),
        None => None,
    };
    board.relocate(id, destination)?;

    let verdict = !inspect_check(board)?.in_check(team);

    board.relocate(id, origin)?;
    if let Some(victim) = captured {
        board.restore_captured(victim)?;
    }

    Ok(verdict)
}

/// The engine contract behind move highlighting: the set of cells the piece
/// may legally move to right now, i.e. its candidate movements filtered
/// through [`is_valid_movement`]. A pinned piece, or one with no candidates
/// at all, yields an empty list.
pub fn safe_movements(board: &mut Board, id: PieceId) -> Result<Vec<BoardCell>, ChessErrors> {
    let piece = {
        let record = board.view_piece(id)?;
        if !record.is_alive {
            return Err(ChessErrors::PieceNotAlive(id));
        }
        *record
    };

    let candidates = generate_candidate_movements(board, &piece);
    let mut safe = Vec::with_capacity(candidates.len());
    for cell in candidates {
        if is_valid_movement(board, id, cell)? {
            safe.push(cell);
        }
    }
    Ok(safe)
}

/// A piece is nailed (pinned) iff it has at least one candidate movement
/// and every single one of them fails the safety probe.
pub fn is_nailed_piece(board: &mut Board, id: PieceId) -> Result<bool, ChessErrors> {
    let piece = *board.view_piece(id)?;
    let candidates = generate_candidate_movements(board, &piece);
    if candidates.is_empty() {
        return Ok(false);
    }
    for cell in candidates {
        if is_valid_movement(board, id, cell)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Ids of the given team's living pieces that have at least one safe
/// movement. An empty answer for the checked side means checkmate.
pub fn has_secure_moves(board: &mut Board, team: PieceTeam) -> Result<Vec<PieceId>, ChessErrors> {
    let ids: Vec<PieceId> = board
        .register()
        .living_of_team(team)
        .map(|record| record.id)
        .collect();

    let mut movable = Vec::new();
    for id in ids {
        if !safe_movements(board, id)?.is_empty() {
            movable.push(id);
        }
    }
    Ok(movable)
}

/// True iff some king is in check and the checked side has no secure moves
/// across its entire team.
pub fn is_checkmate(board: &mut Board) -> Result<bool, ChessErrors> {
    let report = inspect_check(board)?;
    match report.checked_team(board.turn_team()) {
        Some(team) => Ok(has_secure_moves(board, team)?.is_empty()),
        None => Ok(false),
    }
}
