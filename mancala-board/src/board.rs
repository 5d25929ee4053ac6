//! Raw Kalah board dynamics.
//!
//! A [`Board`] is a small `Copy` value, so every move produces a fresh board and
//! the original is never touched. The board does not know whose turn it is:
//! callers name the moving [`Player`] explicitly, and extra turns are reported
//! back rather than tracked. [`Game`](crate::Game) layers turn order on top.
//!
//! Sowing runs counter-clockwise. From the mover's point of view the ring is:
//! their own cups left to right, their store, then the opponent's cups from the
//! opponent's left. The opponent's store is skipped. Cup `i` of one player
//! faces cup `CUPS - 1 - i` of the other.

use crate::{Move, MoveList, Player, CUPS, MAX_STONES, STONES_PER_CUP};
use derive_more::{Display, Error};
use std::fmt;

/// Ring slot of the mover's store.
const STORE_SLOT: usize = CUPS;

/// Slots visited while sowing: both rows of cups and the mover's store.
const RING: usize = 2 * CUPS + 1;

/// Cup and store contents for both players.
///
/// A board never holds more than [`MAX_STONES`] stones, so no cup or store can
/// overflow while sowing or sweeping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cups: [[u8; CUPS]; 2],
    stores: [u8; 2],
}

impl Default for Board {
    /// Gets the standard starting board: four stones in every cup.
    fn default() -> Self {
        Self::with_stones(STONES_PER_CUP)
    }
}

impl Board {
    /// Construct a starting board with `stones` in every cup.
    ///
    /// # Panics
    /// Panics if the board would hold more than [`MAX_STONES`] stones.
    pub const fn with_stones(stones: u8) -> Self {
        assert!(
            stones as u32 * 2 * CUPS as u32 <= MAX_STONES,
            "too many stones for one board"
        );
        Self {
            cups: [[stones; CUPS]; 2],
            stores: [0, 0],
        }
    }

    /// The cups `player` owns, from that player's left.
    #[inline]
    pub fn cups(&self, player: Player) -> &[u8; CUPS] {
        &self.cups[player.index()]
    }

    /// The stones `player` has banked.
    #[inline]
    pub fn store(&self, player: Player) -> u8 {
        self.stores[player.index()]
    }

    /// Count every stone on the board, in cups and stores. Constant over a game.
    pub fn total_stones(&self) -> u32 {
        let in_cups: u32 = self.cups.iter().flatten().map(|&c| c as u32).sum();
        let in_stores: u32 = self.stores.iter().map(|&s| s as u32).sum();
        in_cups + in_stores
    }

    /// Get the legal moves for `player`: every non-empty cup, left to right.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        self.cups(player)
            .iter()
            .enumerate()
            .filter(|&(_, &stones)| stones > 0)
            .map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// Returns whether `mv` can be played by `player` on this board.
    #[inline]
    pub fn is_legal(&self, player: Player, mv: Move) -> bool {
        !mv.is_invalid() && mv.to_index() < CUPS && self.cups(player)[mv.to_index()] > 0
    }

    /// Returns whether the game has ended: one side has no stones left in play.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.cups.iter().any(|row| row.iter().all(|&c| c == 0))
    }

    /// Returns whether `player` has won: the game is over and they banked more.
    #[inline]
    pub fn has_won(&self, player: Player) -> bool {
        self.is_game_over() && self.store(player) > self.store(!player)
    }

    /// Sow the cup `mv` for `player`.
    /// Returns the resulting board and whether `player` earned an extra turn.
    /// The move is unchecked: it must be legal for `player`.
    pub fn make_move(mut self, player: Player, mv: Move) -> (Self, bool) {
        let me = player.index();
        let them = (!player).index();
        let cup = mv.to_index();

        let mut stones = self.cups[me][cup];
        self.cups[me][cup] = 0;

        let mut slot = cup;
        while stones > 0 {
            slot = (slot + 1) % RING;
            match slot {
                s if s < CUPS => self.cups[me][s] += 1,
                STORE_SLOT => self.stores[me] += 1,
                s => self.cups[them][s - STORE_SLOT - 1] += 1,
            }
            stones -= 1;
        }

        // Landing in one of my own empty cups captures the facing cup.
        if slot < CUPS && self.cups[me][slot] == 1 {
            let facing = CUPS - 1 - slot;
            let captured = self.cups[them][facing];
            if captured > 0 {
                self.cups[them][facing] = 0;
                self.cups[me][slot] = 0;
                self.stores[me] += captured + 1;
            }
        }

        if self.is_game_over() {
            self.sweep();
            return (self, false);
        }

        (self, slot == STORE_SLOT)
    }

    /// Bank every stone still in play into its owner's store.
    fn sweep(&mut self) {
        for (row, store) in self.cups.iter_mut().zip(self.stores.iter_mut()) {
            *store += row.iter().sum::<u8>();
            *row = [0; CUPS];
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected two sides separated by '/'")]
    WrongSideCount,
    #[display(fmt = "expected six cups and a store per side")]
    WrongCupCount,
    #[display(fmt = "invalid stone count")]
    InvalidCount,
    #[display(fmt = "more than 255 stones on the board")]
    TooManyStones,
}

/// Parse a board from "c c c c c c s / c c c c c c s":
/// player one's cups and store, then player two's.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides: Vec<&str> = s.split('/').collect();
        if sides.len() != 2 {
            return Err(ParseBoardError::WrongSideCount);
        }

        let mut board = Self::with_stones(0);
        for (side, text) in sides.into_iter().enumerate() {
            let counts = text
                .split_whitespace()
                .map(|n| n.parse::<u8>().or(Err(ParseBoardError::InvalidCount)))
                .collect::<Result<Vec<u8>, _>>()?;

            if counts.len() != CUPS + 1 {
                return Err(ParseBoardError::WrongCupCount);
            }

            board.cups[side].copy_from_slice(&counts[..CUPS]);
            board.stores[side] = counts[CUPS];
        }

        if board.total_stones() > MAX_STONES {
            return Err(ParseBoardError::TooManyStones);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in [Player::One, Player::Two].iter() {
            if *player == Player::Two {
                f.write_str(" / ")?;
            }
            for cup in self.cups(*player).iter() {
                write!(f, "{} ", cup)?;
            }
            write!(f, "{}", self.store(*player))?;
        }
        Ok(())
    }
}
