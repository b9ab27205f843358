//! Command session: the single owner of the running game.
//!
//! A [`Session`] applies parsed commands to its [`Game`] and hands back a
//! [`Response`]. The command loop in [`run`] ties parsing, execution and
//! rendering together and stops when a command yields [`Flow::Quit`].

use crate::command::{self, Command, ParseError};
use crate::render::{self, PlayerNames};
use connect6_engine::{BoardError, Cell, Game, GameConfig, PlaceError, TurnOutcome};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use std::string::FromUtf8Error;
use tracing::{debug, info, instrument, warn};

/// Whether the command loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the loop.
    Quit,
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A turn was accepted.
    Placed(TurnOutcome),
    /// Whole board, row by row.
    Grid(Vec<Vec<Cell>>),
    /// One row or column.
    Line(Vec<Cell>),
    /// One cell.
    Cell(Cell),
    /// The game was replaced by a fresh one.
    Reset,
    /// The loop should stop.
    Quit,
}

impl Response {
    /// Loop control implied by this response.
    pub fn flow(&self) -> Flow {
        match self {
            Response::Quit => Flow::Quit,
            _ => Flow::Continue,
        }
    }
}

/// A rejected command. The game is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// Line did not parse.
    #[display("{_0}")]
    Parse(ParseError),
    /// Turn was illegal.
    #[display("{_0}")]
    Place(PlaceError),
    /// Query index outside a standard board.
    #[display("{_0}")]
    Board(BoardError),
    /// Input line is not valid UTF-8.
    #[display("{_0}")]
    Encoding(FromUtf8Error),
}

/// Owns the current game and the player names used for output.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    names: PlayerNames,
}

impl Session {
    /// Starts a session with a fresh game.
    #[instrument(skip(names))]
    pub fn new(config: GameConfig, names: PlayerNames) -> Self {
        info!(
            size = config.size(),
            topology = %config.topology(),
            win_length = config.win_length(),
            "Starting session"
        );
        Self {
            game: Game::new(config),
            names,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one command to the game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] for illegal turns and out-of-range queries;
    /// the game is not modified in that case.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Response, SessionError> {
        let board = self.game.board();
        let response = match command {
            Command::Place {
                row1,
                col1,
                row2,
                col2,
            } => Response::Placed(self.game.place(row1, col1, row2, col2)?),
            Command::Print => Response::Grid(board.rows().map(<[Cell]>::to_vec).collect()),
            Command::RowPrint(row) => Response::Line(board.row(row)?.to_vec()),
            Command::ColPrint(col) => Response::Line(board.column(col)?),
            Command::State { row, col } => Response::Cell(board.get(row, col)?),
            Command::Reset => {
                self.game = self.game.restart();
                Response::Reset
            }
            Command::Quit => Response::Quit,
        };
        Ok(response)
    }

    /// Parses, executes and renders one input line.
    ///
    /// Returns the text to print (if any) and whether to keep reading.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> (Option<String>, Flow) {
        let result = command::parse(line)
            .map_err(SessionError::from)
            .and_then(|command| self.execute(command));
        match result {
            Ok(response) => {
                debug!(?response, "Command executed");
                (render::response(&self.names, &response), response.flow())
            }
            Err(err) => {
                warn!(%err, "Command rejected");
                (Some(render::error(&err)), Flow::Continue)
            }
        }
    }
}

/// Runs the command loop until `quit` or end of input.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop early; rejected
/// commands and lines that are not UTF-8 are reported on `output` and the
/// loop goes on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut output: W) -> std::io::Result<()> {
    let mut buf = Vec::new();
    loop {
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let (text, flow) = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => session.handle_line(line.trim_end_matches('\r')),
            Err(err) => {
                let err = SessionError::from(err);
                warn!(%err, "Line rejected");
                (Some(render::error(&err)), Flow::Continue)
            }
        };
        if let Some(text) = text {
            writeln!(output, "{}", text)?;
        }
        output.flush()?;
        if flow == Flow::Quit {
            info!("Quit requested");
            break;
        }
    }
    Ok(())
}
