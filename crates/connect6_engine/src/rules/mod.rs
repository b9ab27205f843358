//! Game rules for connect6.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage and from the turn engine so they can be tested in isolation.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{AXES, DEFAULT_WIN_LENGTH, check_winner, longest_run, run_length};
