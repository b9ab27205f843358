//! Contract-based validation for connect6 turns.
//!
//! Preconditions are checked before any stone is placed; postconditions
//! verify the game invariants after an accepted turn in debug builds.

use super::action::{PlaceError, Turn};
use super::invariants::{Connect6Invariants, InvariantSet};
use super::Game;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlaceError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), PlaceError>;
}

// ─────────────────────────────────────────────────────────────
//  Turn Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or drawn.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects any turn once the game is over.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), PlaceError> {
        if game.is_over() {
            Err(PlaceError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a turn for the player not to move.
    #[instrument(skip(game))]
    pub fn check(turn: &Turn, game: &Game) -> Result<(), PlaceError> {
        if turn.player != game.to_move() {
            Err(PlaceError::NotYourTurn(turn.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the two stones land on different cells after normalization.
///
/// Also surfaces an out-of-range target on a standard board before any
/// stone is placed.
pub struct DistinctTargets;

impl DistinctTargets {
    /// Normalizes both targets and rejects a turn that hits one cell twice.
    #[instrument(skip(game))]
    pub fn check(turn: &Turn, game: &Game) -> Result<(), PlaceError> {
        let board = game.board();
        let [first, second] = turn
            .targets()
            .map(|target| board.normalize(target.row, target.col));
        let (first, second) = (first?, second?);
        if first == second {
            Err(PlaceError::DuplicateTarget(first))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a turn.
pub struct LegalTurn;

impl LegalTurn {
    /// Validates all preconditions for a turn.
    #[instrument(skip(game))]
    pub fn check(turn: &Turn, game: &Game) -> Result<(), PlaceError> {
        GameInProgress::check(game)?;
        PlayersTurn::check(turn, game)?;
        DistinctTargets::check(turn, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for turn actions.
///
/// Preconditions:
/// - Game is in progress
/// - It is the player's turn
/// - Targets are distinct
///
/// Postconditions:
/// - Two stones per completed turn
/// - Players still alternate
pub struct TurnContract;

impl Contract<Game, Turn> for TurnContract {
    fn pre(game: &Game, action: &Turn) -> Result<(), PlaceError> {
        LegalTurn::check(action, game)
    }

    fn post(after: &Game) -> Result<(), PlaceError> {
        Connect6Invariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlaceError::InvariantViolation(format!("postcondition failed: {}", descriptions))
        })
    }
}
