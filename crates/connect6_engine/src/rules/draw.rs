//! Draw detection logic for connect6.

use crate::board::Board;
use tracing::instrument;

/// Checks whether the game can no longer continue.
///
/// Call only after the last turn was found not to win. A turn needs two
/// empty cells, so a board with fewer than two left (odd side length) is
/// as final as a full one.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.empty_count() < 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Topology};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(4, Topology::Standard).unwrap();
        assert!(!board.is_full());
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut board = Board::new(4, Topology::Torus).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                board.set(row, col, Player::First).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_single_empty_cell_is_draw() {
        let mut board = Board::new(5, Topology::Standard).unwrap();
        for row in 0..5 {
            for col in 0..5 {
                if (row, col) != (4, 4) {
                    board.set(row, col, Player::Second).unwrap();
                }
            }
        }
        assert!(!board.is_full());
        assert!(is_draw(&board));
    }
}
