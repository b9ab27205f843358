//! Connect6 - two-stone alignment game over a line command interface
//!
//! The game logic lives in [`connect6_engine`]; this crate adds the
//! text front end around it.
//!
//! # Architecture
//!
//! - **Command**: table-driven parsing of input lines into [`Command`]s
//! - **Session**: owns the running [`Game`] and applies commands to it
//! - **Render**: turns responses and errors into output lines
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use connect6::{GameConfig, PlayerNames, Session, Topology, run};
//!
//! let config = GameConfig::new(5, Topology::Torus, 5).unwrap();
//! let mut session = Session::new(config, PlayerNames::default());
//! let mut out = Vec::new();
//! run(&mut session, "place 0;0;0;1\nstate 5;5\nquit\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "OK\nP1\n");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod render;
mod session;

pub use command::{COMMANDS, Command, CommandSpec, CommandTag, ParseError, parse};
pub use config::{AppConfig, ConfigError};
pub use render::{EMPTY_CELL, PlayerNames};
pub use session::{Flow, Response, Session, SessionError, run};

pub use connect6_engine::{
    Board, BoardError, Cell, Coord, DEFAULT_WIN_LENGTH, Game, GameConfig, GameStatus, PlaceError,
    Player, SetupError, Topology, Turn, TurnOutcome,
};
