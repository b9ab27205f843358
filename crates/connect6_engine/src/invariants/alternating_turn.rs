//! Alternating turn invariant: First, Second, First, Second, ...

use super::Invariant;
use crate::{Game, GameStatus, Player};

/// Invariant: players alternate turns.
///
/// History must show First, Second, First, ... and the player to move must
/// follow from it. A finished game keeps the last mover as `to_move`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, turn)| turn.player.order() == i % 2);
        if !alternates {
            return false;
        }

        let expected = match (game.status(), history.last()) {
            (_, None) => Player::First,
            (GameStatus::InProgress, Some(last)) => last.player.opponent(),
            (_, Some(last)) => last.player,
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}
