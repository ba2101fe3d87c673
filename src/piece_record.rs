use crate::board_cell::BoardCell;

/// Represents the team (color) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The white side. Moves first; pawns advance toward row 0.
    White,
    /// The black side. Pawns advance toward row 7.
    Black,
}

impl PieceTeam {
    /// The opposing team.
    pub fn opposite(&self) -> PieceTeam {
        match self {
            PieceTeam::White => PieceTeam::Black,
            PieceTeam::Black => PieceTeam::White,
        }
    }

    /// Row delta of a forward pawn step for this team.
    pub fn forward_direction(&self) -> i8 {
        match self {
            PieceTeam::White => -1,
            PieceTeam::Black => 1,
        }
    }

    /// The row a pawn of this team starts on, from which the double step is
    /// allowed.
    pub fn pawn_start_row(&self) -> i8 {
        match self {
            PieceTeam::White => 6,
            PieceTeam::Black => 1,
        }
    }
}

/// Represents the class (type) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Unique, immutable identifier of a piece within one game's registry.
///
/// Ids are assigned at team construction and survive capture; a captured
/// piece stays addressable by id for the whole game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub u8);

/// One piece of the game: identity, affiliation, geometry class, and
/// placement state.
///
/// `cell` is the single source of truth for the piece's grid position while
/// it is alive; the board grid is derived from it. `home_cell` is the
/// configured starting cell used when the board is (re)set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub id: PieceId,
    pub team: PieceTeam,
    pub class: PieceClass,
    pub cell: BoardCell,
    pub home_cell: BoardCell,
    pub is_alive: bool,
}

impl PieceRecord {
    /// Creates a living record placed on its home cell.
    pub fn new(id: PieceId, team: PieceTeam, class: PieceClass, home_cell: BoardCell) -> Self {
        PieceRecord {
            id,
            team,
            class,
            cell: home_cell,
            home_cell,
            is_alive: true,
        }
    }
}
