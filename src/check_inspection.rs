//! Check detection.
//!
//! `inspect_check` scans every living piece's candidate movements and tests
//! whether any of them lands on the opposing king's cell. The scan is
//! deliberately unrestricted: it evaluates both kings on every call, because
//! the hypothetical-move prober in `move_safety` can produce transient
//! states where both kings are simultaneously attackable. The report
//! therefore carries an independent flag per king, and the single-team view
//! breaks the (unreachable in real play) tie deterministically in favor of
//! the side whose turn it is.

use crate::board::Board;
use crate::chess_errors::ChessErrors;
use crate::movements::shared::generate_candidate_movements;
use crate::piece_record::PieceTeam;

/// Outcome of one check scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    white_in_check: bool,
    black_in_check: bool,
}

impl CheckReport {
    /// True iff the given team's king is attacked.
    pub fn in_check(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::White => self.white_in_check,
            PieceTeam::Black => self.black_in_check,
        }
    }

    /// True iff either king is attacked.
    pub fn any(&self) -> bool {
        self.white_in_check || self.black_in_check
    }

    /// The single team considered "the" checked side, with `precedence`
    /// winning the both-kings tie. Callers pass the side to move, which
    /// makes the tie-break deterministic and independent of registry
    /// iteration order.
    pub fn checked_team(&self, precedence: PieceTeam) -> Option<PieceTeam> {
        if self.in_check(precedence) {
            Some(precedence)
        } else if self.in_check(precedence.opposite()) {
            Some(precedence.opposite())
        } else {
            None
        }
    }

    /// The team attacking the checked king, if any.
    pub fn attacker_team(&self, precedence: PieceTeam) -> Option<PieceTeam> {
        self.checked_team(precedence).map(|team| team.opposite())
    }
}

/// Scans the whole board for checks against either king.
///
/// For every living piece the candidate movements are generated and compared
/// against the opposing king's cell. Pawn forward moves can never coincide
/// with a king cell (they are only generated onto empty cells), so the scan
/// naturally matches attack geometry.
pub fn inspect_check(board: &Board) -> Result<CheckReport, ChessErrors> {
    let white_king_cell = board.register().view_king(PieceTeam::White)?.cell;
    let black_king_cell = board.register().view_king(PieceTeam::Black)?.cell;

    let mut report = CheckReport {
        white_in_check: false,
        black_in_check: false,
    };

    for piece in board.register().living() {
        let target = match piece.team {
            PieceTeam::White => black_king_cell,
            PieceTeam::Black => white_king_cell,
        };
        if generate_candidate_movements(board, piece)
            .iter()
            .any(|cell| *cell == target)
        {
            match piece.team {
                PieceTeam::White => report.black_in_check = true,
                PieceTeam::Black => report.white_in_check = true,
            }
        }
    }

    Ok(report)
}
