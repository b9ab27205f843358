//! Turn engine for connect6.
//!
//! [`Game`] owns the board, the player to move and the game status. Its
//! single mutating operation, [`Game::play_turn`], places two stones
//! atomically and reports whether the turn won, drew or continued the game.

use super::action::{PlaceError, Turn};
use super::board::{Board, SetupError};
use super::contracts::{Contract, TurnContract};
use super::rules::{self, DEFAULT_WIN_LENGTH};
use super::types::{Player, Topology};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What an accepted turn did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The acting player completed a winning run.
    Win(Player),
    /// No winner and no further turn possible.
    Draw,
    /// The game goes on with the other player.
    Continue,
}

/// Immutable parameters of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    size: usize,
    topology: Topology,
    win_length: usize,
}

impl GameConfig {
    /// Validates and creates a game configuration.
    ///
    /// # Errors
    ///
    /// - [`SetupError::InvalidSize`] if `size` is outside the supported range
    /// - [`SetupError::InvalidWinLength`] unless `2 <= win_length <= size`
    #[instrument]
    pub fn new(size: usize, topology: Topology, win_length: usize) -> Result<Self, SetupError> {
        Board::new(size, topology)?;
        if !(2..=size).contains(&win_length) {
            return Err(SetupError::InvalidWinLength { win_length, size });
        }
        Ok(Self {
            size,
            topology,
            win_length,
        })
    }

    /// Configuration with the default winning run length.
    pub fn with_default_win_length(size: usize, topology: Topology) -> Result<Self, SetupError> {
        Self::new(size, topology, DEFAULT_WIN_LENGTH)
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Board topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Stones in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

/// Connect6 game engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Turn>,
}

impl Game {
    /// Creates a new game with an empty board; `Player::First` moves first.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::empty(config.size, config.topology),
            to_move: Player::First,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns a fresh game with the same size, topology and win length.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        info!(size = self.config.size, topology = %self.config.topology, "Restarting game");
        Self::new(self.config)
    }

    /// Returns the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns accepted turns with normalized coordinates.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Plays a turn for the player to move.
    pub fn place(
        &mut self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    ) -> Result<TurnOutcome, PlaceError> {
        let turn = Turn::from_indices(self.to_move, row1, col1, row2, col2);
        self.play_turn(turn)
    }

    /// Places both stones of a turn and evaluates the result.
    ///
    /// The turn is all-or-nothing: if either stone cannot be placed the
    /// board, the player to move and the status are left untouched.
    ///
    /// # Panics
    ///
    /// In debug builds, if the game invariants fail after an accepted turn.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameAlreadyOver`] after a win or draw
    /// - [`PlaceError::NotYourTurn`] if `turn.player` is not to move
    /// - [`PlaceError::DuplicateTarget`] if both stones hit the same cell
    /// - [`PlaceError::Board`] for an occupied or out-of-range target
    #[instrument(skip(self, turn), fields(turn = %turn))]
    pub fn play_turn(&mut self, turn: Turn) -> Result<TurnOutcome, PlaceError> {
        TurnContract::pre(self, &turn)?;

        let first = self.board.set(turn.first.row, turn.first.col, turn.player)?;
        let second = match self.board.set(turn.second.row, turn.second.col, turn.player) {
            Ok(coord) => coord,
            Err(err) => {
                warn!(%err, "Second stone rejected, rolling back first");
                self.board.clear(first);
                return Err(err.into());
            }
        };
        self.history.push(Turn::new(turn.player, first, second));

        let outcome = if let Some(winner) =
            rules::check_winner(&self.board, &[first, second], turn.player, self.config.win_length)
        {
            info!(?winner, "Game won");
            self.status = GameStatus::Won(winner);
            TurnOutcome::Win(winner)
        } else if rules::is_draw(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
            TurnOutcome::Draw
        } else {
            self.to_move = self.to_move.opponent();
            debug!(next = ?self.to_move, "Turn accepted");
            TurnOutcome::Continue
        };

        debug_assert_eq!(TurnContract::post(self), Ok(()));

        Ok(outcome)
    }
}
