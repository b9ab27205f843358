//! Connect6 engine - pure game logic
//!
//! Two players take turns placing two stones each on an N x N board. A
//! player wins by completing a run of `win_length` stones along a row,
//! column or diagonal. The board is either bounded ([`Topology::Standard`])
//! or wraps around at its edges ([`Topology::Torus`]).
//!
//! # Example
//!
//! ```
//! use connect6_engine::{Game, GameConfig, Topology, TurnOutcome};
//!
//! let config = GameConfig::new(6, Topology::Torus, 4).unwrap();
//! let mut game = Game::new(config);
//! assert_eq!(game.place(0, 5, 0, 6), Ok(TurnOutcome::Continue));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod game;
mod invariants;
pub mod rules;
mod types;

pub use action::{PlaceError, Turn};
pub use board::{Board, BoardError, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SetupError};
pub use contracts::{Contract, DistinctTargets, GameInProgress, LegalTurn, PlayersTurn, TurnContract};
pub use game::{Game, GameConfig, GameStatus, TurnOutcome};
pub use invariants::{
    AlternatingTurnInvariant, Connect6Invariants, Invariant, InvariantSet, InvariantViolation,
    StoneCountInvariant,
};
pub use rules::DEFAULT_WIN_LENGTH;
pub use types::{Cell, Coord, Player, Topology};
