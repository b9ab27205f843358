//! Core domain types for connect6.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves first).
    First,
    /// Second player.
    Second,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Zero-based turn order (0 for first, 1 for second).
    pub fn order(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's stone.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the stone in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// True if no stone occupies the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Board edge behaviour, fixed for the lifetime of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Topology {
    /// Hard edges: indices outside `[0, N)` are rejected.
    #[default]
    Standard,
    /// Rows and columns wrap around: index `N` is index `0`.
    Torus,
}

/// A (row, column) pair.
///
/// Coordinates handed in by callers are raw and may lie outside the board;
/// coordinates returned by the board are always normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{row};{col}")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}
