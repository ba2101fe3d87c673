//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board construction,
//! registry access, and the move-safety machinery. Construction-time
//! validation is the only hard failure path in the engine; everything that
//! happens during play is either infallible or expressed as a boolean
//! predicate. Variants carry the offending id or cell so callers can log a
//! precise diagnostic.

use crate::board_cell::BoardCell;
use crate::piece_record::{PieceId, PieceTeam};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Generic failure used in tests or as a catch-all when no more specific
    /// variant applies.
    FailedTest,

    /// A team roster handed to the board did not contain exactly 16 pieces.
    ///
    /// Payload: (team, actual_count)
    WrongTeamSize((PieceTeam, usize)),

    /// A roster contained a piece colored for the other team.
    ///
    /// Payload: (expected_team, offending_id)
    WrongTeamAffiliation((PieceTeam, PieceId)),

    /// Two records in the combined registry share the same id.
    DuplicatePieceId(PieceId),

    /// A team roster did not contain exactly one king.
    TeamMustHaveOneKing(PieceTeam),

    /// A lookup used an id that is not present in the registry.
    UnknownPieceId(PieceId),

    /// An operation that requires a living piece was given a captured one.
    PieceNotAlive(PieceId),

    /// Attempted to offset a cell by a delta `(d_row, d_col)` which would
    /// place it off the board.
    ///
    /// Payload: (origin_cell, d_row, d_col)
    TriedToMoveOutOfBounds((BoardCell, i8, i8)),

    /// Two pieces claimed the same home cell while the board was being reset.
    StartingCellOccupied(BoardCell),

    /// Attempted to capture on a cell that holds no living piece.
    CaptureOnEmptyCell(BoardCell),
}
