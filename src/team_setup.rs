//! Fixed starting rosters for a standard game.
//!
//! Each side fields the classic sixteen pieces: the back row holds rook,
//! knight, bishop, queen, king, bishop, knight, rook (columns 0..=7), the row
//! in front of it eight pawns. Black occupies rows 0 and 1, white rows 6
//! and 7. Ids are assigned deterministically: black takes `0..=15`, white
//! `16..=31`, in roster order, so the kings always receive ids 4 and 20.

use crate::board::Board;
use crate::chess_errors::ChessErrors;
use crate::piece_record::{PieceClass, PieceId, PieceRecord, PieceTeam};

const BACK_ROW_CLASSES: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

/// Builds the standard sixteen-piece roster for one team.
pub fn standard_team(team: PieceTeam) -> Vec<PieceRecord> {
    let (back_row, pawn_row, id_base) = match team {
        PieceTeam::Black => (0, 1, 0u8),
        PieceTeam::White => (7, 6, 16u8),
    };

    let mut roster = Vec::with_capacity(16);
    for (col, class) in BACK_ROW_CLASSES.iter().enumerate() {
        roster.push(PieceRecord::new(
            PieceId(id_base + col as u8),
            team,
            *class,
            (back_row, col as i8),
        ));
    }
    for col in 0..8 {
        roster.push(PieceRecord::new(
            PieceId(id_base + 8 + col as u8),
            team,
            PieceClass::Pawn,
            (pawn_row, col),
        ));
    }
    roster
}

/// Builds a board with both standard teams placed on their home cells,
/// white to move.
pub fn standard_board() -> Result<Board, ChessErrors> {
    Board::new(
        standard_team(PieceTeam::Black),
        standard_team(PieceTeam::White),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roster_shape() {
        for team in [PieceTeam::Black, PieceTeam::White] {
            let roster = standard_team(team);
            assert_eq!(roster.len(), 16);
            assert_eq!(
                roster.iter().filter(|r| r.class == PieceClass::Pawn).count(),
                8
            );
            assert_eq!(
                roster.iter().filter(|r| r.class == PieceClass::King).count(),
                1
            );
            assert!(roster.iter().all(|r| r.team == team && r.is_alive));
        }
    }

    #[test]
    fn kings_have_reserved_ids() {
        let black = standard_team(PieceTeam::Black);
        let white = standard_team(PieceTeam::White);
        assert_eq!(black[4].class, PieceClass::King);
        assert_eq!(black[4].id, PieceId(4));
        assert_eq!(white[4].class, PieceClass::King);
        assert_eq!(white[4].id, PieceId(20));
    }

    #[test]
    fn pawns_start_on_double_step_rows() {
        for record in standard_team(PieceTeam::White) {
            if record.class == PieceClass::Pawn {
                assert_eq!(record.home_cell.0, PieceTeam::White.pawn_start_row());
            }
        }
        for record in standard_team(PieceTeam::Black) {
            if record.class == PieceClass::Pawn {
                assert_eq!(record.home_cell.0, PieceTeam::Black.pawn_start_row());
            }
        }
    }
}
