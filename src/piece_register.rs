use crate::chess_errors::ChessErrors;
use crate::piece_record::{PieceClass, PieceId, PieceRecord, PieceTeam};

/// Number of pieces each side must field at construction time.
pub const TEAM_SIZE: usize = 16;

/// Ordered registry of every piece in one game, black block first, then
/// white, each exactly [`TEAM_SIZE`] records.
///
/// The registry is the full-piece lookup table: captured pieces remain in it
/// with `is_alive == false` so they can still be resolved by id. Roster
/// validation happens once, in [`PieceRegister::from_teams`]; afterwards the
/// king of each team is addressable in O(1) through its recorded id.
#[derive(Clone, Debug)]
pub struct PieceRegister {
    pieces: Vec<PieceRecord>,
    black_king: PieceId,
    white_king: PieceId,
}

impl PieceRegister {
    /// Builds a registry from two validated team rosters.
    ///
    /// This is the engine's only hard failure path: each roster must hold
    /// exactly 16 pieces, every record must be colored for its roster, ids
    /// must be unique across both teams, and each team must field exactly
    /// one king.
    pub fn from_teams(
        black_pieces: Vec<PieceRecord>,
        white_pieces: Vec<PieceRecord>,
    ) -> Result<Self, ChessErrors> {
        let black_king = Self::validate_roster(PieceTeam::Black, &black_pieces)?;
        let white_king = Self::validate_roster(PieceTeam::White, &white_pieces)?;

        let mut pieces = black_pieces;
        pieces.extend(white_pieces);

        for (index, record) in pieces.iter().enumerate() {
            if pieces[..index].iter().any(|other| other.id == record.id) {
                return Err(ChessErrors::DuplicatePieceId(record.id));
            }
        }

        Ok(PieceRegister {
            pieces,
            black_king,
            white_king,
        })
    }

    fn validate_roster(team: PieceTeam, roster: &[PieceRecord]) -> Result<PieceId, ChessErrors> {
        if roster.len() != TEAM_SIZE {
            return Err(ChessErrors::WrongTeamSize((team, roster.len())));
        }
        for record in roster {
            if record.team != team {
                return Err(ChessErrors::WrongTeamAffiliation((team, record.id)));
            }
        }
        let mut kings = roster.iter().filter(|r| r.class == PieceClass::King);
        match (kings.next(), kings.next()) {
            (Some(king), None) => Ok(king.id),
            _ => Err(ChessErrors::TeamMustHaveOneKing(team)),
        }
    }

    /// Id of the given team's king.
    pub fn king_id(&self, team: PieceTeam) -> PieceId {
        match team {
            PieceTeam::Black => self.black_king,
            PieceTeam::White => self.white_king,
        }
    }

    /// Immutable lookup of a record by id.
    pub fn view_piece(&self, id: PieceId) -> Result<&PieceRecord, ChessErrors> {
        self.pieces
            .iter()
            .find(|record| record.id == id)
            .ok_or(ChessErrors::UnknownPieceId(id))
    }

    /// Mutable lookup of a record by id.
    pub fn edit_piece(&mut self, id: PieceId) -> Result<&mut PieceRecord, ChessErrors> {
        self.pieces
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(ChessErrors::UnknownPieceId(id))
    }

    /// The king record of the given team.
    pub fn view_king(&self, team: PieceTeam) -> Result<&PieceRecord, ChessErrors> {
        self.view_piece(self.king_id(team))
    }

    /// All records in registry order (black block, then white).
    pub fn iter(&self) -> impl Iterator<Item = &PieceRecord> {
        self.pieces.iter()
    }

    /// Living records only, in registry order.
    pub fn living(&self) -> impl Iterator<Item = &PieceRecord> {
        self.pieces.iter().filter(|record| record.is_alive)
    }

    /// Living records of one team, in registry order.
    pub fn living_of_team(&self, team: PieceTeam) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.living().filter(move |record| record.team == team)
    }

    #[cfg(test)]
    pub(crate) fn records_snapshot(&self) -> Vec<PieceRecord> {
        self.pieces.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::team_setup::standard_team;

    #[test]
    fn accepts_standard_teams() -> Result<(), ChessErrors> {
        let dut = PieceRegister::from_teams(
            standard_team(PieceTeam::Black),
            standard_team(PieceTeam::White),
        )?;
        assert_eq!(dut.iter().count(), 2 * TEAM_SIZE);
        assert_eq!(dut.view_king(PieceTeam::White)?.class, PieceClass::King);
        assert_eq!(dut.view_king(PieceTeam::Black)?.team, PieceTeam::Black);
        Ok(())
    }

    #[test]
    fn rejects_short_roster() {
        let mut black = standard_team(PieceTeam::Black);
        black.pop();
        let result = PieceRegister::from_teams(black, standard_team(PieceTeam::White));
        assert_eq!(
            result.err(),
            Some(ChessErrors::WrongTeamSize((PieceTeam::Black, 15)))
        );
    }

    #[test]
    fn rejects_wrong_affiliation() {
        let mut white = standard_team(PieceTeam::White);
        let stray = standard_team(PieceTeam::Black).remove(0);
        white[0] = stray;
        let result = PieceRegister::from_teams(standard_team(PieceTeam::Black), white);
        assert!(matches!(
            result,
            Err(ChessErrors::WrongTeamAffiliation((PieceTeam::White, _)))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let black = standard_team(PieceTeam::Black);
        let mut white = standard_team(PieceTeam::White);
        white[5].id = black[5].id;
        let result = PieceRegister::from_teams(black, white);
        assert!(matches!(result, Err(ChessErrors::DuplicatePieceId(_))));
    }

    #[test]
    fn rejects_kingless_team() {
        let mut black = standard_team(PieceTeam::Black);
        for record in &mut black {
            if record.class == PieceClass::King {
                record.class = PieceClass::Queen;
            }
        }
        let result = PieceRegister::from_teams(black, standard_team(PieceTeam::White));
        assert_eq!(
            result.err(),
            Some(ChessErrors::TeamMustHaveOneKing(PieceTeam::Black))
        );
    }

    #[test]
    fn captured_pieces_stay_addressable() -> Result<(), ChessErrors> {
        let mut dut = PieceRegister::from_teams(
            standard_team(PieceTeam::Black),
            standard_team(PieceTeam::White),
        )?;
        let id = dut.iter().next().map(|r| r.id).ok_or(ChessErrors::FailedTest)?;
        dut.edit_piece(id)?.is_alive = false;
        assert!(!dut.view_piece(id)?.is_alive);
        assert_eq!(dut.living().count(), 31);
        Ok(())
    }
}
