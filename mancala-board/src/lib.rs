//! `mancala-board` implements the rules of Kalah for engines and UIs.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds raw cup and store contents and sows moves for either player.
//!    It does not track whose turn it is, which is what a search needs.
//!  - [`Game`] is a high-level, safe interface that validates moves and
//!    handles extra turns. It is slower but safer than [`Board`].

pub mod test_utils;

mod board;
mod cup;
mod game;

pub use board::*;
pub use cup::*;
pub use game::*;

/// The number of cups each player owns.
pub const CUPS: usize = 6;

/// The number of stones placed in every cup at the start of a standard game.
pub const STONES_PER_CUP: u8 = 4;

/// The most stones a [`Board`] may hold, cups and stores together.
pub const MAX_STONES: u32 = u8::MAX as u32;
