//! Game-tree search for Kalah.
//!
//!  - [`Position`] is everything the search needs from a board.
//!  - [`Evaluator`]s score leaves from a fixed player's point of view.
//!  - [`Search`] runs plain minimax or alpha-beta to a fixed depth.
//!  - [`Agent`] ties a player, a depth and a [`Strategy`] together and picks moves.

mod agent;
mod eval;
mod position;
mod search;

pub use agent::*;
pub use eval::*;
pub use position::*;
pub use search::*;
