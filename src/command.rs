//! Line command grammar.
//!
//! Parsing is data-driven: [`COMMANDS`] maps each [`CommandTag`] to its
//! argument count and to a constructor turning validated integers into a
//! [`Command`]. Nothing here touches game state.

use derive_more::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Keyword that starts a command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum CommandTag {
    /// `place r1;c1;r2;c2`
    Place,
    /// `print`
    Print,
    /// `rowprint r`
    RowPrint,
    /// `colprint c`
    ColPrint,
    /// `state r;c`
    State,
    /// `reset`
    Reset,
    /// `quit`
    Quit,
}

/// A parsed, validated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place two stones for the player to move.
    Place {
        /// First stone row.
        row1: usize,
        /// First stone column.
        col1: usize,
        /// Second stone row.
        row2: usize,
        /// Second stone column.
        col2: usize,
    },
    /// Print the whole board.
    Print,
    /// Print one row.
    RowPrint(usize),
    /// Print one column.
    ColPrint(usize),
    /// Print one cell.
    State {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Start over with an empty board.
    Reset,
    /// Leave the command loop.
    Quit,
}

/// Grammar entry for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Keyword.
    pub tag: CommandTag,
    /// Number of `;`-separated integer arguments.
    pub arity: usize,
    /// Builds the command from exactly `arity` arguments.
    pub build: fn(&[usize]) -> Command,
}

/// The command table.
pub static COMMANDS: [CommandSpec; 7] = [
    CommandSpec {
        tag: CommandTag::Place,
        arity: 4,
        build: |a| Command::Place {
            row1: a[0],
            col1: a[1],
            row2: a[2],
            col2: a[3],
        },
    },
    CommandSpec {
        tag: CommandTag::Print,
        arity: 0,
        build: |_| Command::Print,
    },
    CommandSpec {
        tag: CommandTag::RowPrint,
        arity: 1,
        build: |a| Command::RowPrint(a[0]),
    },
    CommandSpec {
        tag: CommandTag::ColPrint,
        arity: 1,
        build: |a| Command::ColPrint(a[0]),
    },
    CommandSpec {
        tag: CommandTag::State,
        arity: 2,
        build: |a| Command::State { row: a[0], col: a[1] },
    },
    CommandSpec {
        tag: CommandTag::Reset,
        arity: 0,
        build: |_| Command::Reset,
    },
    CommandSpec {
        tag: CommandTag::Quit,
        arity: 0,
        build: |_| Command::Quit,
    },
];

impl CommandSpec {
    /// Finds the table entry for a tag.
    pub fn lookup(tag: CommandTag) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|spec| spec.tag == tag)
    }
}

/// Why a line is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// Blank line.
    #[display("empty command")]
    Empty,

    /// First word is not a known keyword.
    #[display("unknown command '{}', expected one of: {}", _0, known_commands())]
    UnknownCommand(String),

    /// Wrong number of arguments.
    #[display("{tag} expects {expected} argument(s), got {found}")]
    WrongArity {
        /// Command keyword.
        tag: CommandTag,
        /// Arguments required.
        expected: usize,
        /// Arguments given.
        found: usize,
    },

    /// Argument is not a non-negative decimal integer.
    #[display("'{_0}' is not a non-negative integer")]
    InvalidNumber(String),
}

impl std::error::Error for ParseError {}

fn known_commands() -> String {
    CommandTag::iter()
        .map(|tag| tag.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_number(text: &str) -> Result<usize, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }
    text.parse()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

/// Parses one input line into a command.
///
/// The grammar is strict: a keyword, then for commands with arguments a
/// single space and `;`-separated integers. No other whitespace is allowed.
#[instrument]
pub fn parse(line: &str) -> Result<Command, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (keyword, rest) = match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (line, None),
    };

    let spec = CommandTag::from_str(keyword)
        .ok()
        .and_then(CommandSpec::lookup)
        .ok_or_else(|| ParseError::UnknownCommand(keyword.to_string()))?;

    let args = match rest {
        None => Vec::new(),
        Some(rest) => rest
            .split(';')
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()?,
    };

    // `place` with a trailing space but no numbers is caught by parse_number.
    if args.len() != spec.arity {
        return Err(ParseError::WrongArity {
            tag: spec.tag,
            expected: spec.arity,
            found: args.len(),
        });
    }

    Ok((spec.build)(&args))
}
