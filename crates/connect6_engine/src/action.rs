//! First-class turn type for connect6.
//!
//! A turn is the atomic unit of play: one player placing two stones.

use super::board::BoardError;
use super::types::{Coord, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One player placing two stones.
///
/// Coordinates may be raw (as typed by a user) before the turn is played;
/// turns recorded in a game's history carry normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Turn {
    /// The player placing the stones.
    pub player: Player,
    /// Target of the first stone.
    pub first: Coord,
    /// Target of the second stone.
    pub second: Coord,
}

impl Turn {
    /// Builds a turn from raw `row;col;row;col` indices.
    pub fn from_indices(player: Player, row1: usize, col1: usize, row2: usize, col2: usize) -> Self {
        Self::new(player, Coord::new(row1, col1), Coord::new(row2, col2))
    }

    /// Both targets, in placement order.
    pub fn targets(&self) -> [Coord; 2] {
        [self.first, self.second]
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {};{}", self.player, self.first, self.second)
    }
}

/// Error that can occur when validating or applying a turn.
///
/// Every variant except [`PlaceError::InvariantViolation`] means the game
/// is exactly as it was before the turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// A target was occupied or outside a standard board.
    #[display("{_0}")]
    Board(BoardError),

    /// Both stones normalize to the same cell.
    #[display("both stones target cell {_0}")]
    DuplicateTarget(Coord),

    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameAlreadyOver,

    /// It is not this player's turn.
    #[display("it is not {_0}'s turn")]
    NotYourTurn(Player),

    /// An invariant was violated after a turn was applied.
    ///
    /// Reported by [`TurnContract::post`](crate::TurnContract); unlike the
    /// other variants it describes a game that has already changed.
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for PlaceError {}

impl From<BoardError> for PlaceError {
    fn from(err: BoardError) -> Self {
        PlaceError::Board(err)
    }
}
