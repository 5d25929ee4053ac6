//! Implements game-level Kalah logic.
//!
//! For correctness, this higher-level interface is preferred, but search code
//! may use [`Board`] directly and track the mover itself.

use crate::{Board, Move};
use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    One,
    Two,
}

impl Default for Player {
    /// Gets the starting player.
    fn default() -> Self {
        Self::One
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Player {
    /// Index of this player's row on the board: 0 for [`Player::One`], 1 for [`Player::Two`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("1"),
            Player::Two => f.write_str("2"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid player: expected 1 or 2")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Player::One),
            "2" => Ok(Player::Two),
            _ => Err(ParsePlayerError),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "illegal move {} for player {}", mv, player)]
pub struct IllegalMoveError {
    pub mv: Move,
    pub player: Player,
}

/// The complete state of a Kalah game: the board and whose turn it is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// Gets the standard starting position with [`Player::One`] to move.
    fn default() -> Self {
        Self::new(Board::default(), Player::default())
    }
}

impl Game {
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Returns whether the game has ended.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.board.is_game_over()
    }

    /// The winner of a finished game, or None for a draw or an unfinished game.
    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .iter()
            .copied()
            .find(|&player| self.board.has_won(player))
    }

    /// Make a move as the active player.
    /// The active player moves again if the last stone landed in their store.
    pub fn apply_move(self, mv: Move) -> Result<Self, IllegalMoveError> {
        let player = self.active_player;
        if self.is_finished() || !self.board.is_legal(player, mv) {
            return Err(IllegalMoveError { mv, player });
        }

        let (board, extra_turn) = self.board.make_move(player, mv);
        let active_player = if extra_turn { player } else { !player };
        Ok(Self::new(board, active_player))
    }
}

/// Draws the board from player one's side, with player two's row on top.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     {}", format_row(self.board.cups(Player::Two).iter().rev()))?;
        writeln!(
            f,
            "{:>2}{:>21}{:>2}",
            self.board.store(Player::Two),
            "",
            self.board.store(Player::One)
        )?;
        writeln!(f, "     {}", format_row(self.board.cups(Player::One).iter()))?;
        write!(f, "Player {} to move", self.active_player)
    }
}

fn format_row<'a>(cups: impl Iterator<Item = &'a u8>) -> String {
    cups.map(|c| format!("{:>2}", c)).join(" ")
}
