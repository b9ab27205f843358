//! Square board with topology-aware indexing.

use super::types::{Cell, Coord, Player, Topology};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported side length.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 64;

/// Errors raised by board reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Index lies outside a standard board.
    #[display("{row};{col} is outside the {size}x{size} board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// Target cell already holds a stone.
    #[display("cell {_0} is already occupied")]
    OccupiedCell(Coord),
}

impl std::error::Error for BoardError {}

/// Errors raised when a board or game cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SetupError {
    /// Side length outside the supported range.
    #[display("board size {} must be between {} and {}", _0, MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    InvalidSize(usize),

    /// Winning run length that can never or trivially be reached.
    #[display("win length {win_length} must be between 2 and the board size {size}")]
    InvalidWinLength {
        /// Requested run length.
        win_length: usize,
        /// Board side length.
        size: usize,
    },
}

impl std::error::Error for SetupError {}

/// N x N board.
///
/// Cells are stored in row-major order. The topology decides how indices
/// outside `[0, N)` are treated: rejected on a standard board, reduced
/// modulo `N` on a torus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    topology: Topology,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board, validating the side length.
    #[instrument]
    pub fn new(size: usize, topology: Topology) -> Result<Self, SetupError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(SetupError::InvalidSize(size));
        }
        Ok(Self::empty(size, topology))
    }

    /// Creates an empty board from an already validated size.
    pub(crate) fn empty(size: usize, topology: Topology) -> Self {
        Self {
            size,
            topology,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge behaviour of this board.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Maps a raw (row, col) to an on-board coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] on a standard board when either
    /// index is `>= N`. Never fails on a torus.
    pub fn normalize(&self, row: usize, col: usize) -> Result<Coord, BoardError> {
        match self.topology {
            Topology::Torus => Ok(Coord::new(row % self.size, col % self.size)),
            Topology::Standard if row < self.size && col < self.size => Ok(Coord::new(row, col)),
            Topology::Standard => Err(BoardError::OutOfRange {
                row,
                col,
                size: self.size,
            }),
        }
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    /// Reads a cell after normalization.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let coord = self.normalize(row, col)?;
        Ok(self.cell(coord))
    }

    /// Reads a normalized coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Places a stone for `player`, returning the normalized coordinate.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfRange`] on a standard board for indices `>= N`
    /// - [`BoardError::OccupiedCell`] if the cell already holds a stone
    ///
    /// The board is untouched on error.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<Coord, BoardError> {
        let coord = self.normalize(row, col)?;
        let index = self.index(coord);
        if !self.cells[index].is_empty() {
            return Err(BoardError::OccupiedCell(coord));
        }
        self.cells[index] = Cell::Occupied(player);
        Ok(coord)
    }

    /// Empties a cell. Only used to roll back a half-applied turn.
    pub(crate) fn clear(&mut self, coord: Coord) {
        let index = self.index(coord);
        self.cells[index] = Cell::Empty;
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of stones owned by `player`.
    pub fn stone_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Returns one row, left to right.
    pub fn row(&self, row: usize) -> Result<&[Cell], BoardError> {
        let start = self.normalize(row, 0)?.row * self.size;
        Ok(&self.cells[start..start + self.size])
    }

    /// Returns one column, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<Cell>, BoardError> {
        let col = self.normalize(0, col)?.col;
        Ok((0..self.size)
            .map(|row| self.cell(Coord::new(row, col)))
            .collect())
    }

    /// Iterates over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Moves one step from `coord` by `(dr, dc)`.
    ///
    /// Returns `None` when the step leaves a standard board; a torus wraps.
    pub fn step(&self, coord: Coord, dr: isize, dc: isize) -> Option<Coord> {
        let n = self.size as isize;
        let row = coord.row as isize + dr;
        let col = coord.col as isize + dc;
        match self.topology {
            Topology::Torus => Some(Coord::new(
                row.rem_euclid(n) as usize,
                col.rem_euclid(n) as usize,
            )),
            Topology::Standard if (0..n).contains(&row) && (0..n).contains(&col) => {
                Some(Coord::new(row as usize, col as usize))
            }
            Topology::Standard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(topology: Topology) -> Board {
        Board::new(5, topology).unwrap()
    }

    #[test]
    fn test_rejects_tiny_and_huge_boards() {
        assert_eq!(Board::new(3, Topology::Standard), Err(SetupError::InvalidSize(3)));
        assert_eq!(Board::new(65, Topology::Torus), Err(SetupError::InvalidSize(65)));
        assert!(Board::new(4, Topology::Standard).is_ok());
    }

    #[test]
    fn test_torus_normalizes_reads() {
        let mut b = board(Topology::Torus);
        b.set(0, 0, Player::First).unwrap();
        assert_eq!(b.get(5, 0).unwrap(), b.get(0, 0).unwrap());
        assert_eq!(b.get(10, 15).unwrap(), Cell::Occupied(Player::First));
    }

    #[test]
    fn test_standard_rejects_out_of_range() {
        let b = board(Topology::Standard);
        assert_eq!(
            b.get(5, 0),
            Err(BoardError::OutOfRange { row: 5, col: 0, size: 5 })
        );
        assert!(b.get(4, 4).is_ok());
    }

    #[test]
    fn test_set_occupied_does_not_mutate() {
        let mut b = board(Topology::Standard);
        b.set(2, 2, Player::First).unwrap();
        let before = b.clone();
        assert_eq!(
            b.set(2, 2, Player::Second),
            Err(BoardError::OccupiedCell(Coord::new(2, 2)))
        );
        assert_eq!(b, before);
    }

    #[test]
    fn test_torus_set_returns_normalized_coord() {
        let mut b = board(Topology::Torus);
        assert_eq!(b.set(7, 11, Player::Second), Ok(Coord::new(2, 1)));
        assert_eq!(b.set(2, 6, Player::First), Err(BoardError::OccupiedCell(Coord::new(2, 1))));
    }

    #[test]
    fn test_is_full_matches_cell_scan() {
        let mut b = Board::new(4, Topology::Standard).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert!(!b.is_full());
                let player = if (row + col) % 2 == 0 { Player::First } else { Player::Second };
                b.set(row, col, player).unwrap();
            }
        }
        assert!(b.is_full());
        assert_eq!(b.empty_count(), 0);
        assert_eq!(b.stone_count(Player::First), 8);
    }

    #[test]
    fn test_row_and_column_extraction() {
        let mut b = board(Topology::Torus);
        b.set(1, 3, Player::First).unwrap();
        assert_eq!(b.row(6).unwrap()[3], Cell::Occupied(Player::First));
        assert_eq!(b.column(8).unwrap()[1], Cell::Occupied(Player::First));
        assert_eq!(b.rows().count(), 5);

        let s = board(Topology::Standard);
        assert!(s.row(5).is_err());
        assert!(s.column(9).is_err());
    }

    #[test]
    fn test_step_wraps_only_on_torus() {
        let origin = Coord::new(0, 4);
        assert_eq!(board(Topology::Standard).step(origin, 0, 1), None);
        assert_eq!(board(Topology::Standard).step(origin, 1, -1), Some(Coord::new(1, 3)));
        assert_eq!(board(Topology::Torus).step(origin, 0, 1), Some(Coord::new(0, 0)));
        assert_eq!(board(Topology::Torus).step(origin, -1, 1), Some(Coord::new(4, 0)));
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut b = board(Topology::Standard);
        let coord = b.set(3, 3, Player::Second).unwrap();
        b.clear(coord);
        assert_eq!(b, board(Topology::Standard));
    }
}
