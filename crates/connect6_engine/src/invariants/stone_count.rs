//! Stone count invariant: every turn adds exactly two stones.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: each player owns exactly two stones per turn they played.
///
/// Catches a half-applied turn (first stone not rolled back) as well as
/// stones written behind the engine's back.
pub struct StoneCountInvariant;

impl Invariant<Game> for StoneCountInvariant {
    fn holds(game: &Game) -> bool {
        Player::ALL.iter().all(|&player| {
            let turns = game.history().iter().filter(|t| t.player == player).count();
            game.board().stone_count(player) == 2 * turns
        })
    }

    fn description() -> &'static str {
        "Each player owns two stones per completed turn"
    }
}
