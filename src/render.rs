//! Console output formatting.

use crate::session::Response;
use connect6_engine::{Cell, Player, TurnOutcome};

/// Text shown for an empty cell.
pub const EMPTY_CELL: &str = "**";

/// Display names of the two players, in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames([String; 2]);

impl PlayerNames {
    /// Creates names for the first and second player.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self([first.into(), second.into()])
    }

    /// Name of `player`.
    pub fn name(&self, player: Player) -> &str {
        &self.0[player.order()]
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("P1", "P2")
    }
}

/// Formats one cell.
pub fn cell(names: &PlayerNames, cell: Cell) -> &str {
    match cell {
        Cell::Empty => EMPTY_CELL,
        Cell::Occupied(player) => names.name(player),
    }
}

/// Formats a row or column as space-separated cells.
pub fn line(names: &PlayerNames, cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|&c| cell(names, c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a response, or `None` when nothing is printed.
pub fn response(names: &PlayerNames, response: &Response) -> Option<String> {
    let text = match response {
        Response::Placed(TurnOutcome::Continue) | Response::Reset => "OK".to_string(),
        Response::Placed(TurnOutcome::Win(player)) => format!("{} wins", names.name(*player)),
        Response::Placed(TurnOutcome::Draw) => "draw".to_string(),
        Response::Grid(rows) => rows
            .iter()
            .map(|row| line(names, row))
            .collect::<Vec<_>>()
            .join("\n"),
        Response::Line(cells) => line(names, cells),
        Response::Cell(c) => cell(names, *c).to_string(),
        Response::Quit => return None,
    };
    Some(text)
}

/// Formats a rejected command.
pub fn error(err: &impl std::fmt::Display) -> String {
    format!("Error, {}", err)
}
