//! Win detection logic for connect6.
//!
//! Only the stones placed by the last turn can complete a new run, so
//! detection scans the four axes through each of them instead of the whole
//! board.

use crate::board::Board;
use crate::types::{Cell, Coord, Player};
use tracing::{debug, instrument};

/// Stones in a row needed to win unless a game says otherwise.
pub const DEFAULT_WIN_LENGTH: usize = 6;

/// Axis directions: horizontal, vertical, diagonal, anti-diagonal.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Counts consecutive stones of `player` from `origin` (exclusive) along
/// `(dr, dc)`.
///
/// On a torus the scan wraps and stops after `N - 1` steps, at which point
/// it would be back at `origin`.
fn count_direction(board: &Board, origin: Coord, player: Player, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut current = origin;
    while count + 1 < board.size() {
        match board.step(current, dr, dc) {
            Some(next) if board.cell(next) == Cell::Occupied(player) => {
                count += 1;
                current = next;
            }
            _ => break,
        }
    }
    count
}

/// Length of the run through `origin` along one axis.
///
/// `origin` is counted as one of `player`'s stones. The result never
/// exceeds the board size, so a fully owned torus line counts once.
pub fn run_length(board: &Board, origin: Coord, player: Player, axis: (isize, isize)) -> usize {
    let (dr, dc) = axis;
    let forward = count_direction(board, origin, player, dr, dc);
    let backward = count_direction(board, origin, player, -dr, -dc);
    (1 + forward + backward).min(board.size())
}

/// Longest run through `origin` over all four axes.
#[instrument(skip(board))]
pub fn longest_run(board: &Board, origin: Coord, player: Player) -> usize {
    AXES.iter()
        .map(|&axis| run_length(board, origin, player, axis))
        .max()
        .unwrap_or(1)
}

/// Checks whether any freshly placed stone completes a winning run.
///
/// Each stone is checked on its own since the two may sit on different
/// lines. Returns `Some(player)` on a win, `None` otherwise.
#[instrument(skip(board, placed))]
pub fn check_winner(
    board: &Board,
    placed: &[Coord],
    player: Player,
    win_length: usize,
) -> Option<Player> {
    for &coord in placed {
        let longest = longest_run(board, coord, player);
        if longest >= win_length {
            debug!(%coord, longest, "Winning run found");
            return Some(player);
        }
    }
    None
}
